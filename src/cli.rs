use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "scatterplot granularity ranking experiment")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Run an interactive ranking session in the terminal
    Run {
        /// Directory holding the point-set files (1.json .. 20.json)
        #[arg(short, long, default_value = "pickedpoints3")]
        data_dir: PathBuf,

        /// Where the final scores artifact is written
        #[arg(short, long, default_value = "elo_scores.txt")]
        output: PathBuf,
    },
    /// Run an automated session with a random participant
    Simulate {
        /// Seed for the simulated participant (defaults to OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Optional path to write the final scores artifact to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-display a previously exported scores file
    Show {
        /// Scores file produced by a finished session
        file: PathBuf,
    },
}
