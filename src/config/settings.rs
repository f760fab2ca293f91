pub struct RatingSettings {
    pub initial_rating: f64,
    pub k_factor: f64,
    pub scale: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            k_factor: 32.0,
            scale: 400.0,
        }
    }
}

pub struct SessionSettings {
    pub min_comparisons: usize,
    pub max_comparisons: usize,
    pub stability_window: usize,
    pub stability_tolerance: f64,
    pub max_selection_attempts: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            min_comparisons: 40,
            max_comparisons: 80,
            stability_window: 6,
            stability_tolerance: 5.0,
            max_selection_attempts: 50,
        }
    }
}

pub struct DataSettings {
    pub item_count: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { item_count: 20 }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub session: SessionSettings,
    pub data: DataSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            session: SessionSettings::default(),
            data: DataSettings::default(),
        }
    }
}

// Passed explicitly (Dependency Injection) rather than held in globals.
