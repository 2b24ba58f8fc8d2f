//! Configuration file loading for spark-connect
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./spark.toml` or `./.spark.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/spark-connect/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileMatchingConfig, FileOnboardingConfig, FileOutputConfig, FileQuizConfig,
    FileStorageConfig, FileVerificationConfig,
};
pub use loader::ConfigLoader;
