use std::collections::HashSet;

use rand::Rng;

use crate::config::settings::SessionSettings;
use crate::domain::Matchup;

/// Pick the next matchup to present.
///
/// The first item is drawn uniformly at random; its opponent is the item
/// with the closest rating, so comparisons land between items of similar
/// perceived granularity. Draws that hit an excluded pair are retried up
/// to `max_selection_attempts` times; `None` signals that no valid
/// matchup remains.
pub fn select_next(
    ratings: &[f64],
    excluded: &HashSet<(usize, usize)>,
    settings: &SessionSettings,
    rng: &mut impl Rng,
) -> Option<Matchup> {
    assert!(ratings.len() >= 2, "A matchup requires at least two items.");

    for _ in 0..settings.max_selection_attempts {
        let matchup = draw_candidate(ratings, rng);
        if !excluded.contains(&matchup.unordered()) {
            return Some(matchup);
        }
    }
    None
}

fn draw_candidate(ratings: &[f64], rng: &mut impl Rng) -> Matchup {
    let first = rng.random_range(0..ratings.len());
    Matchup::new(first, closest_opponent(ratings, first))
}

/// Opponent with the minimum absolute rating difference to `first`.
/// Ties go to the lowest index.
fn closest_opponent(ratings: &[f64], first: usize) -> usize {
    let mut best = if first == 0 { 1 } else { 0 };
    let mut best_diff = (ratings[best] - ratings[first]).abs();

    for (index, &rating) in ratings.iter().enumerate() {
        if index == first {
            continue;
        }
        let diff = (rating - ratings[first]).abs();
        if diff < best_diff {
            best = index;
            best_diff = diff;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SessionSettings {
        SessionSettings::default()
    }

    #[test]
    fn test_closest_opponent_by_rating_distance() {
        let ratings = [1000.0, 1200.0, 1210.0, 1500.0];
        assert_eq!(closest_opponent(&ratings, 3), 2);
        assert_eq!(closest_opponent(&ratings, 1), 2);
        assert_eq!(closest_opponent(&ratings, 0), 1);
    }

    #[test]
    fn test_closest_opponent_tie_goes_to_lowest_index() {
        let ratings = [1000.0, 990.0, 1010.0, 500.0];
        assert_eq!(closest_opponent(&ratings, 0), 1);
    }

    #[test]
    fn test_selected_pair_is_valid() {
        let ratings = vec![1000.0; 20];
        let excluded = HashSet::new();
        let mut rng = rand::rng();

        for _ in 0..100 {
            let matchup = select_next(&ratings, &excluded, &settings(), &mut rng)
                .expect("open pair space must yield a matchup");
            assert_ne!(matchup.first, matchup.second);
            assert!(matchup.first < 20 && matchup.second < 20);
        }
    }

    #[test]
    fn test_excluded_pair_is_never_reselected() {
        // Items 2 and 5 share a rating, so each is the other's closest
        // opponent; every other item is closest to item 0.
        let mut ratings = vec![1000.0; 20];
        ratings[2] = 1500.0;
        ratings[5] = 1500.0;

        let excluded: HashSet<(usize, usize)> = [(2, 5)].into();
        let mut rng = rand::rng();

        for _ in 0..200 {
            if let Some(matchup) = select_next(&ratings, &excluded, &settings(), &mut rng) {
                assert_ne!(matchup.unordered(), (2, 5));
            }
        }
    }

    #[test]
    fn test_exhausted_pair_space_returns_none() {
        // With uniform ratings every candidate pair contains item 0;
        // excluding all of those leaves nothing to select.
        let ratings = vec![1000.0; 20];
        let excluded: HashSet<(usize, usize)> = (1..20).map(|other| (0, other)).collect();
        let mut rng = rand::rng();

        assert_eq!(select_next(&ratings, &excluded, &settings(), &mut rng), None);
    }
}
