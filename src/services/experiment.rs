use anyhow::Result;
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::domain::{Choice, EndReason, Matchup, PointSet, SessionSummary};
use crate::presenter::Presenter;
use crate::session::{self, SessionState};

/// Runs one complete ranking session: select a matchup, present it, fold
/// the participant's choice into the ratings, consult the termination
/// rules, repeat until the session ends.
pub struct ExperimentService<P: Presenter> {
    config: AppConfig,
    pointsets: Vec<PointSet>,
    presenter: P,
}

impl<P: Presenter> ExperimentService<P> {
    pub fn new(config: AppConfig, pointsets: Vec<PointSet>, presenter: P) -> Self {
        Self {
            config,
            pointsets,
            presenter,
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("=== Starting Ranking Session ===\n");
        info!(
            "  → {} items, ratings start at {}\n",
            self.pointsets.len(),
            self.config.rating.initial_rating
        );

        let mut rng = rand::rng();
        let mut state = SessionState::new(self.pointsets.len(), &self.config.rating);

        let end_reason = loop {
            let Some(matchup) = session::select_next(
                state.ratings(),
                state.excluded_pairs(),
                &self.config.session,
                &mut rng,
            ) else {
                break EndReason::MatchupsExhausted;
            };

            let choice = self.present(&state, matchup)?;
            session::resolve(&mut state, matchup, choice, &self.config.rating);

            if let Some(reason) = session::should_end(&state, &self.config.session) {
                break reason;
            }
        };

        self.log_end(&state, end_reason);
        Ok(state.finalize(end_reason))
    }

    fn present(&mut self, state: &SessionState, matchup: Matchup) -> Result<Choice> {
        self.presenter.present(
            matchup,
            &self.pointsets[matchup.first],
            &self.pointsets[matchup.second],
            state.comparison_count(),
        )
    }

    fn log_end(&self, state: &SessionState, end_reason: EndReason) {
        if end_reason.is_forced() {
            warn!(
                "Session force-ended ({}): no valid matchup within {} attempts",
                end_reason.as_str(),
                self.config.session.max_selection_attempts
            );
        } else {
            info!("Session ended: {}", end_reason.as_str());
        }
        info!(
            "  → {} comparisons, {} unsure\n",
            state.comparison_count(),
            state.unsure_count()
        );
        info!("=== Session Complete ===");
    }
}
