use super::types::RatingVector;

/// True when every item's rating in the newest snapshot is within
/// `tolerance` of its value `window` snapshots back.
///
/// Only the two endpoint snapshots are inspected; fluctuation inside the
/// window does not count against stability.
pub fn scores_stable(history: &[RatingVector], window: usize, tolerance: f64) -> bool {
    match window_endpoints(history, window) {
        Some((reference, latest)) => max_change(reference, latest) <= tolerance,
        None => false,
    }
}

fn window_endpoints(
    history: &[RatingVector],
    window: usize,
) -> Option<(&RatingVector, &RatingVector)> {
    if history.len() < window + 1 {
        return None;
    }
    let latest = history.len() - 1;
    Some((&history[latest - window], &history[latest]))
}

fn max_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(old_val, new_val)| (new_val - old_val).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: usize = 6;
    const TOLERANCE: f64 = 5.0;

    fn history_of(snapshots: &[Vec<f64>]) -> Vec<RatingVector> {
        snapshots.to_vec()
    }

    #[test]
    fn test_short_history_is_not_stable() {
        let history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW]);
        assert!(!scores_stable(&history, WINDOW, TOLERANCE));
    }

    #[test]
    fn test_unchanged_history_is_stable() {
        let history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW + 1]);
        assert!(scores_stable(&history, WINDOW, TOLERANCE));
    }

    #[test]
    fn test_change_at_tolerance_is_still_stable() {
        let mut history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW + 1]);
        history[WINDOW] = vec![1005.0, 995.0];
        assert!(scores_stable(&history, WINDOW, TOLERANCE));
    }

    #[test]
    fn test_change_beyond_tolerance_is_not_stable() {
        let mut history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW + 1]);
        history[WINDOW] = vec![1005.1, 1000.0];
        assert!(!scores_stable(&history, WINDOW, TOLERANCE));
    }

    #[test]
    fn test_only_endpoints_are_compared() {
        // A large spike inside the window is invisible to the check.
        let mut history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW + 1]);
        history[3] = vec![1200.0, 800.0];
        assert!(scores_stable(&history, WINDOW, TOLERANCE));
    }

    #[test]
    fn test_compares_window_back_not_start() {
        // Early snapshots beyond the window do not matter.
        let mut history = history_of(&vec![vec![1000.0, 1000.0]; WINDOW + 3]);
        history[0] = vec![500.0, 1500.0];
        history[1] = vec![700.0, 1300.0];
        assert!(scores_stable(&history, WINDOW, TOLERANCE));
    }
}
