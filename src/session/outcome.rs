use crate::config::settings::RatingSettings;
use crate::domain::{Choice, Matchup};
use crate::rating::{self, Side};

use super::state::SessionState;

/// Fold the participant's choice on one presented matchup into the
/// session state.
///
/// Unsure retires the pair from future selection without touching the
/// ratings; decided choices move both ratings in a single update. Either
/// way the comparison is counted and a snapshot is appended.
pub fn resolve(
    state: &mut SessionState,
    matchup: Matchup,
    choice: Choice,
    settings: &RatingSettings,
) {
    match choice {
        Choice::Unsure => state.apply_unsure(matchup),
        Choice::First => rate(state, matchup, Side::First, settings),
        Choice::Second => rate(state, matchup, Side::Second, settings),
    }
}

fn rate(state: &mut SessionState, matchup: Matchup, winner: Side, settings: &RatingSettings) {
    let first = state.ratings()[matchup.first];
    let second = state.ratings()[matchup.second];
    let (new_first, new_second) = rating::rate_matchup(first, second, winner, settings);
    state.apply_decided(matchup, new_first, new_second);
}
