use crate::config::settings::SessionSettings;
use crate::domain::EndReason;
use crate::rating;

use super::state::SessionState;

/// Decide whether the session is over, consulted after every resolved
/// comparison.
///
/// Rules apply in order; below the comparison minimum nothing else is
/// considered. Selector exhaustion is handled by the session loop, not
/// here.
pub fn should_end(state: &SessionState, settings: &SessionSettings) -> Option<EndReason> {
    if state.comparison_count() < settings.min_comparisons {
        return None;
    }

    if state.unsure_count() >= state.comparison_count() {
        return Some(EndReason::ExcessiveUncertainty);
    }

    if state.comparison_count() > settings.max_comparisons {
        return Some(EndReason::ComparisonCapReached);
    }

    if rating::scores_stable(
        state.history(),
        settings.stability_window,
        settings.stability_tolerance,
    ) {
        return Some(EndReason::RatingsStable);
    }

    None
}
