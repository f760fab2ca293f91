use super::types::{RatingValue, Side};
use crate::config::settings::RatingSettings;

/// Expected win probability of `rating` against `opponent` under the
/// logistic pairing model.
pub fn expected_score(
    rating: RatingValue,
    opponent: RatingValue,
    settings: &RatingSettings,
) -> f64 {
    1.0 / (10f64.powf((opponent - rating) / settings.scale) + 1.0)
}

/// Update both sides of a decided matchup in one step.
///
/// The winner scores 1, the loser 0, and each rating moves by
/// `k_factor * (actual - expected)`. Returns `(new_first, new_second)`.
pub fn rate_matchup(
    first: RatingValue,
    second: RatingValue,
    winner: Side,
    settings: &RatingSettings,
) -> (RatingValue, RatingValue) {
    let expected_first = expected_score(first, second, settings);
    let expected_second = 1.0 - expected_first;

    let (score_first, score_second) = match winner {
        Side::First => (1.0, 0.0),
        Side::Second => (0.0, 1.0),
    };

    (
        first + settings.k_factor * (score_first - expected_first),
        second + settings.k_factor * (score_second - expected_second),
    )
}
