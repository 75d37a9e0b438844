//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Convert club meeting minutes into a JSONL archive.
///
/// Reads the API key from GOOGLE_API_KEY (a .env file is honoured). Log
/// verbosity follows RUST_LOG.
#[derive(Debug, Parser)]
#[command(name = "minutes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Raw minutes file, meetings separated by *** or --- lines
    #[arg(short, long, default_value = "minutes.txt")]
    pub input: PathBuf,

    /// JSONL archive to append records to
    #[arg(short, long, default_value = "formatted_minutes.jsonl")]
    pub output: PathBuf,

    /// Log of segments that could not be archived
    #[arg(short, long, default_value = "errors.log")]
    pub error_log: PathBuf,

    /// TOML configuration file (defaults to minutes.toml when present)
    #[arg(short, long, env = "MINUTES_CONFIG")]
    pub config: Option<PathBuf>,
}
