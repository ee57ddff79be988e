use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::output::print_report;
use services::sources::load_artifacts;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let artifacts = load_artifacts(&cli.repo)?;

    match cli.command {
        Commands::Check => {
            let report = commands::run_checks(&artifacts);
            print_report(cli.json, &report)?;
            if !report.passed() {
                std::process::exit(1);
            }
        }
        Commands::Dump { artifact, dataset } => {
            commands::handle_dump(cli.json, &artifacts, artifact, dataset)?;
        }
    }

    Ok(())
}
