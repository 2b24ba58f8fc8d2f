//! Port for persisting submitted answer sheets.
//!
//! Storing answers is best effort: the quiz flow never waits on or fails
//! because of the store.

use spark_domain::AnswerSheet;
use thiserror::Error;

/// Errors from an answer store.
#[derive(Error, Debug)]
pub enum AnswerStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Port for saving frozen answers.
pub trait AnswerStore: Send + Sync {
    fn save(&self, sheet: &AnswerSheet) -> Result<(), AnswerStoreError>;
}

/// Store that keeps nothing.
pub struct NoAnswerStore;

impl AnswerStore for NoAnswerStore {
    fn save(&self, _sheet: &AnswerSheet) -> Result<(), AnswerStoreError> {
        Ok(())
    }
}
