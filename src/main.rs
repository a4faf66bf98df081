use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use vigil::commands::{check, run};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "End-to-end verification harness for the sighting analysis pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a fixture image and verify the completed analysis
    Run {
        /// Path to the fixture image to submit
        #[arg(long)]
        image: PathBuf,

        /// Base URL of the analysis service
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,

        /// Title recorded with the submission
        #[arg(long, default_value = "Automated verification capture")]
        title: String,

        /// Location recorded with the submission
        #[arg(long, default_value = "New York, USA")]
        location: String,

        /// Where to persist the completed result document
        #[arg(long, default_value = "analysis-result.json")]
        output: PathBuf,

        /// Seconds to wait between status queries
        #[arg(long, default_value_t = 2)]
        poll_interval_secs: u64,

        /// Maximum number of status queries before giving up
        #[arg(long, default_value_t = 60)]
        max_attempts: u32,
    },

    /// Validate a previously persisted result document offline
    Check {
        /// Path to a saved result document (bare document or full status payload)
        result_path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            server,
            title,
            location,
            output,
            poll_interval_secs,
            max_attempts,
        } => run::execute(run::RunOptions {
            image,
            server,
            title,
            location,
            output,
            poll_interval: Duration::from_secs(poll_interval_secs),
            max_attempts,
        }),
        Commands::Check { result_path } => check::execute(&result_path),
    }
}
