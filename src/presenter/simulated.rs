use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Choice, Matchup, PointSet};

use super::Presenter;

/// Automated participant that picks a random side of every matchup.
///
/// Seedable for reproducible dry runs; never answers unsure.
pub struct SimulatedPresenter {
    rng: StdRng,
}

impl SimulatedPresenter {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Presenter for SimulatedPresenter {
    fn present(
        &mut self,
        _matchup: Matchup,
        _first: &PointSet,
        _second: &PointSet,
        _comparison_count: usize,
    ) -> Result<Choice> {
        if self.rng.random::<bool>() {
            Ok(Choice::First)
        } else {
            Ok(Choice::Second)
        }
    }
}
