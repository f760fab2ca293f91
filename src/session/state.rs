use std::collections::HashSet;

use chrono::Utc;

use crate::config::settings::RatingSettings;
use crate::domain::{EndReason, Matchup, SessionSummary};
use crate::rating::RatingVector;

/// All mutable state of one ranking session.
///
/// Owned by the experiment service; collaborators get read-only views and
/// every mutation goes through the outcome processor.
#[derive(Debug, Clone)]
pub struct SessionState {
    ratings: RatingVector,
    history: Vec<RatingVector>,
    excluded_pairs: HashSet<(usize, usize)>,
    comparison_count: usize,
    unsure_count: usize,
}

impl SessionState {
    pub fn new(item_count: usize, settings: &RatingSettings) -> Self {
        Self {
            ratings: vec![settings.initial_rating; item_count],
            history: Vec::new(),
            excluded_pairs: HashSet::new(),
            comparison_count: 0,
            unsure_count: 0,
        }
    }

    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn history(&self) -> &[RatingVector] {
        &self.history
    }

    pub fn excluded_pairs(&self) -> &HashSet<(usize, usize)> {
        &self.excluded_pairs
    }

    pub fn comparison_count(&self) -> usize {
        self.comparison_count
    }

    pub fn unsure_count(&self) -> usize {
        self.unsure_count
    }

    /// Record a decided comparison: both new ratings land in the same step.
    pub(crate) fn apply_decided(&mut self, matchup: Matchup, new_first: f64, new_second: f64) {
        self.ratings[matchup.first] = new_first;
        self.ratings[matchup.second] = new_second;
        self.push_snapshot();
    }

    /// Record an unsure comparison: the pair is retired from selection,
    /// ratings stay untouched, and an unchanged snapshot keeps the
    /// one-entry-per-comparison history cadence.
    pub(crate) fn apply_unsure(&mut self, matchup: Matchup) {
        self.excluded_pairs.insert(matchup.unordered());
        self.unsure_count += 1;
        self.push_snapshot();
    }

    fn push_snapshot(&mut self) {
        self.history.push(self.ratings.clone());
        self.comparison_count += 1;
    }

    /// Freeze the session into its read-only summary.
    pub fn finalize(self, end_reason: EndReason) -> SessionSummary {
        SessionSummary {
            ratings: self.ratings,
            comparison_count: self.comparison_count,
            unsure_count: self.unsure_count,
            end_reason,
            finalized_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_baseline() {
        let state = SessionState::new(20, &RatingSettings::default());
        assert_eq!(state.ratings().len(), 20);
        assert!(state.ratings().iter().all(|&r| r == 1000.0));
        assert!(state.history().is_empty());
        assert_eq!(state.comparison_count(), 0);
        assert_eq!(state.unsure_count(), 0);
    }

    #[test]
    fn test_finalize_carries_session_counters() {
        let mut state = SessionState::new(4, &RatingSettings::default());
        state.apply_unsure(Matchup::new(0, 1));
        state.apply_decided(Matchup::new(2, 3), 1016.0, 984.0);

        let summary = state.finalize(EndReason::RatingsStable);
        assert_eq!(summary.comparison_count, 2);
        assert_eq!(summary.unsure_count, 1);
        assert_eq!(summary.end_reason, EndReason::RatingsStable);
        assert_eq!(summary.ratings, vec![1000.0, 1000.0, 1016.0, 984.0]);
    }
}
