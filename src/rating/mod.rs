pub mod elo;
pub mod stability;
pub mod types;

pub use elo::{expected_score, rate_matchup};
pub use stability::scores_stable;
pub use types::{RatingValue, RatingVector, Side};
