use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fixed scatterplot: an ordered sequence of (x, y) points.
///
/// Matches the on-disk format of the experiment data files: a bare JSON
/// array of two-element arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet(pub Vec<[f64; 2]>);

impl PointSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn x_extent(&self) -> Option<(f64, f64)> {
        Self::extent(self.0.iter().map(|p| p[0]))
    }

    pub fn y_extent(&self) -> Option<(f64, f64)> {
        Self::extent(self.0.iter().map(|p| p[1]))
    }

    fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
        values.fold(None, |extent, v| match extent {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }
}

/// An ordered pair of distinct item indices, currently shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub first: usize,
    pub second: usize,
}

impl Matchup {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The matchup as an unordered pair, for exclusion-set membership.
    pub fn unordered(&self) -> (usize, usize) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

/// The participant's decision on one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    First,
    Second,
    Unsure,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every comparison so far was answered "unsure".
    ExcessiveUncertainty,
    /// The hard cap on comparisons was exceeded.
    ComparisonCapReached,
    /// Ratings changed too little over the recent window.
    RatingsStable,
    /// The selector could not find a non-excluded pair.
    MatchupsExhausted,
}

impl EndReason {
    pub fn as_str(&self) -> &str {
        match self {
            EndReason::ExcessiveUncertainty => "excessive uncertainty",
            EndReason::ComparisonCapReached => "comparison cap reached",
            EndReason::RatingsStable => "ratings stable",
            EndReason::MatchupsExhausted => "matchups exhausted",
        }
    }

    /// Forced ends bypass the rule-based termination thresholds.
    pub fn is_forced(&self) -> bool {
        matches!(self, EndReason::MatchupsExhausted)
    }
}

/// Read-only result of a finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub ratings: Vec<f64>,
    pub comparison_count: usize,
    pub unsure_count: usize,
    pub end_reason: EndReason,
    pub finalized_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_normalizes_order() {
        assert_eq!(Matchup::new(5, 2).unordered(), (2, 5));
        assert_eq!(Matchup::new(2, 5).unordered(), (2, 5));
    }

    #[test]
    fn test_pointset_extents() {
        let points = PointSet(vec![[0.3, 1.0], [0.1, 4.0], [0.9, 2.5]]);
        assert_eq!(points.x_extent(), Some((0.1, 0.9)));
        assert_eq!(points.y_extent(), Some((1.0, 4.0)));
        assert_eq!(PointSet::default().x_extent(), None);
    }

    #[test]
    fn test_only_exhaustion_is_forced() {
        assert!(EndReason::MatchupsExhausted.is_forced());
        assert!(!EndReason::ExcessiveUncertainty.is_forced());
        assert!(!EndReason::ComparisonCapReached.is_forced());
        assert!(!EndReason::RatingsStable.is_forced());
    }
}
