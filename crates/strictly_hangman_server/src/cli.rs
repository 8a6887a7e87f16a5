//! Command-line interface for strictly_hangman_server.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Hangman - word-guessing game server with a JSON REST API
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman_server")]
#[command(about = "Hangman game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
