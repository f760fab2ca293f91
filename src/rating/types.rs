pub type RatingValue = f64;
pub type RatingVector = Vec<RatingValue>;

/// Which side of a matchup won a decided comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}
