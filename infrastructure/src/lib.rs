//! Infrastructure layer for spark-connect
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod device;
pub mod matching;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileMatchingConfig, FileOnboardingConfig, FileOutputConfig,
    FileQuizConfig, FileStorageConfig, FileVerificationConfig,
};
pub use device::{ConfiguredCamera, SystemClock};
pub use matching::RandomMatchStrategy;
pub use storage::{JsonlAnswerStore, JsonlFriendStore};
