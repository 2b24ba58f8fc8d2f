//! Local storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
///
/// # Example
///
/// ```toml
/// [storage]
/// answers_path = "~/.local/share/spark-connect/answers.jsonl"
/// friends_path = "~/.local/share/spark-connect/friends.jsonl"
/// ```
///
/// Nothing is stored for a path that is unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub answers_path: Option<String>,
    pub friends_path: Option<String>,
}

impl FileStorageConfig {
    /// Answers path with a leading `~/` expanded to the home directory.
    pub fn answers_path(&self) -> Option<PathBuf> {
        expand(self.answers_path.as_deref()?)
    }

    /// Friends path, expanded the same way.
    pub fn friends_path(&self) -> Option<PathBuf> {
        expand(self.friends_path.as_deref()?)
    }
}

fn expand(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(raw)),
    }
}
