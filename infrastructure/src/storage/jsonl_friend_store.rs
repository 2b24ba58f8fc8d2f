//! JSONL file holding the friends tab.
//!
//! One `{"type":"friend",...}` line per friend. New friends are appended;
//! removals rewrite the file through a sibling temp file and a rename.

use spark_application::{FriendStore, FriendStoreError};
use spark_domain::Friend;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const RECORD_TYPE: &str = "friend";

/// Friend store backed by a JSONL file.
///
/// Writes are serialized by an internal lock; the file is reopened for
/// every operation so external edits between runs are picked up.
pub struct JsonlFriendStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlFriendStore {
    /// Use the file at `path`, creating parent directories as needed.
    ///
    /// Returns `None` if the directory cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create friend store directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(friend: &Friend) -> Result<String, FriendStoreError> {
        let mut value =
            serde_json::to_value(friend).map_err(|e| FriendStoreError::Serialize(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(RECORD_TYPE.to_string()),
            );
        }
        serde_json::to_string(&value).map_err(|e| FriendStoreError::Serialize(e.to_string()))
    }

    fn parse(line: &str) -> Option<Friend> {
        let value: serde_json::Value = serde_json::from_str(line).ok()?;
        if value.get("type").and_then(|t| t.as_str()) != Some(RECORD_TYPE) {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, FriendStoreError> {
        self.lock
            .lock()
            .map_err(|_| FriendStoreError::Serialize("friend store lock poisoned".to_string()))
    }
}

impl FriendStore for JsonlFriendStore {
    fn load(&self) -> Result<Vec<Friend>, FriendStoreError> {
        let _guard = self.guard()?;
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut friends = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse(&line) {
                Some(friend) => friends.push(friend),
                None => warn!(
                    "Skipping unreadable line {} in {}",
                    number + 1,
                    self.path.display()
                ),
            }
        }
        Ok(friends)
    }

    fn append(&self, friend: &Friend) -> Result<(), FriendStoreError> {
        let line = Self::record(friend)?;
        let _guard = self.guard()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        debug!("Stored friend {} in {}", friend.name(), self.path.display());
        Ok(())
    }

    fn replace(&self, friends: &[Friend]) -> Result<(), FriendStoreError> {
        let lines = friends
            .iter()
            .map(Self::record)
            .collect::<Result<Vec<_>, _>>()?;
        let _guard = self.guard()?;

        let tmp = self.path.with_extension("jsonl.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            for line in &lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        debug!(
            "Rewrote {} friend(s) in {}",
            friends.len(),
            self.path.display()
        );
        Ok(())
    }
}
