use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod error;
mod logging;

use error::CliResult;

#[derive(Parser)]
#[command(name = "manifest")]
#[command(about = "Check sample manifests before a pipeline run")]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manifest CSV and write its normalized copy
    Validate {
        /// Manifest CSV to check
        manifest: PathBuf,

        /// Where to write the normalized manifest [default: manifest.csv]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file with validator options
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Validate {
            manifest,
            output,
            config,
        } => commands::validate_manifest::execute(manifest, output, config),
    }
}
