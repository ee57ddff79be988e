use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slopecheck", version, about = "Resort domain model parity checker")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Repository root containing app.js, scraper/ and android/"
    )]
    pub repo: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all parity checks and exit non-zero on any mismatch.
    Check,
    /// Print one extracted dataset (for debugging extraction rules).
    Dump {
        #[arg(value_enum)]
        artifact: ArtifactArg,
        #[arg(value_enum)]
        dataset: DatasetArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ArtifactArg {
    Web,
    Scraper,
    Android,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DatasetArg {
    Ids,
    Timezones,
    Translations,
    VailStatus,
    SnowbirdStatus,
    NisekoStatus,
}
