pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod presenter;
pub mod rating;
pub mod services;
pub mod session;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{PointSet, SessionSummary};
use crate::presenter::terminal::print_final_table;
use crate::presenter::{Presenter, SimulatedPresenter, TerminalPresenter};
use crate::services::ExperimentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_run(data_dir: &Path, output: &Path) -> Result<()> {
    let config = AppConfig::new();
    let pointsets = data::load_pointsets(data_dir, config.data.item_count)?;

    let summary = run_session(config, pointsets, TerminalPresenter::new())?;
    finish_session(&summary, Some(output))
}

pub fn handle_simulate(seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();

    // The simulated participant never looks at the plots, so the session
    // runs against blank point-sets without any data files on disk.
    let pointsets = vec![PointSet::default(); config.data.item_count];

    let summary = run_session(config, pointsets, SimulatedPresenter::new(seed))?;
    finish_session(&summary, output)
}

pub fn handle_show(file: &Path) -> Result<()> {
    let ratings = export::read_scores(file)?;
    print_final_table(&ratings);
    Ok(())
}

fn run_session<P: Presenter>(
    config: AppConfig,
    pointsets: Vec<PointSet>,
    presenter: P,
) -> Result<SessionSummary> {
    let mut service = ExperimentService::new(config, pointsets, presenter);
    service.run()
}

fn finish_session(summary: &SessionSummary, output: Option<&Path>) -> Result<()> {
    print_final_table(&summary.ratings);

    if let Some(path) = output {
        export::write_scores(path, &summary.ratings)?;
        println!("\nScores written to {}", path.display());
    }
    Ok(())
}
