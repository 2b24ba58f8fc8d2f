//! Presentation layer for spark-connect
//!
//! This crate contains the CLI definition, console output formatting,
//! the splash progress bar, and the line-driven console.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::ConsoleConfig;
pub use output::console::ConsoleFormatter;
pub use progress::splash::SplashProgress;
pub use repl::SparkRepl;
