//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for spark-connect
#[derive(Parser, Debug)]
#[command(name = "spark-connect")]
#[command(author, version, about = "Meet your next buddy on Spark")]
#[command(long_about = r#"
Spark matches you with people you disagree with, to build lasting friendships.

Take a short swipe quiz, get matched, go meet your match and scan their
code to confirm you met.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./spark.toml        Project-level config
3. ~/.config/spark-connect/config.toml   Global config

Example:
  spark-connect
  spark-connect --seed 7 --skip-splash
  spark-connect --script demo.txt --no-color
"#)]
pub struct Cli {
    /// Read commands from a file instead of the terminal
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Seed the match stand-in for reproducible matches
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Refuse to submit until every question is answered
    #[arg(long)]
    pub require_complete: bool,

    /// Camera permission to simulate (authorized, denied, restricted, not_determined)
    #[arg(long, value_name = "STATE")]
    pub camera: Option<String>,

    /// Skip the splash screen after submitting
    #[arg(long)]
    pub skip_splash: bool,

    /// Append submitted answers to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Keep the friends tab in this JSONL file
    #[arg(long, value_name = "PATH")]
    pub friends: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
