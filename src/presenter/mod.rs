pub mod simulated;
pub mod terminal;

pub use simulated::SimulatedPresenter;
pub use terminal::TerminalPresenter;

use anyhow::Result;

use crate::domain::{Choice, Matchup, PointSet};

/// Shows one matchup to the participant and reports the decision back.
///
/// The session loop is independent of how point-sets are displayed;
/// anything that can answer with a `Choice` can drive a session.
pub trait Presenter {
    fn present(
        &mut self,
        matchup: Matchup,
        first: &PointSet,
        second: &PointSet,
        comparison_count: usize,
    ) -> Result<Choice>;
}
