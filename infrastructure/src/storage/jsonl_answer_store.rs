//! JSONL file writer for submitted answer sheets.
//!
//! Each [`AnswerSheet`] is written as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use spark_application::{AnswerStore, AnswerStoreError};
use spark_domain::AnswerSheet;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const RECORD_TYPE: &str = "answer_sheet";

/// Answer store that appends one JSON object per submitted sheet.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every sheet and
/// on `Drop`.
pub struct JsonlAnswerStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnswerStore {
    /// Open the store at `path`, appending to an existing file.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create answer store directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open answer store {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(sheet: &AnswerSheet) -> Result<String, AnswerStoreError> {
        let mut value =
            serde_json::to_value(sheet).map_err(|e| AnswerStoreError::Serialize(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(RECORD_TYPE.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(
                    sheet
                        .submitted_at()
                        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
            );
        }
        serde_json::to_string(&value).map_err(|e| AnswerStoreError::Serialize(e.to_string()))
    }
}

impl AnswerStore for JsonlAnswerStore {
    fn save(&self, sheet: &AnswerSheet) -> Result<(), AnswerStoreError> {
        let line = Self::record(sheet)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| AnswerStoreError::Serialize("answer store lock poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        debug!("Stored answer sheet in {}", self.path.display());
        Ok(())
    }
}

impl Drop for JsonlAnswerStore {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
