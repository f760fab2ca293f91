use anyhow::Result;

use granularity_ranking::cli::Command;
use granularity_ranking::{handle_run, handle_show, handle_simulate, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Run { data_dir, output } => handle_run(data_dir, output),
        Command::Simulate { seed, output } => handle_simulate(*seed, output.as_deref()),
        Command::Show { file } => handle_show(file),
    }
}
