//! Port for the friends tab's local store.
//!
//! Like answer storage, this is best effort: a failing store is logged and
//! the in-memory list keeps working.

use spark_domain::Friend;
use thiserror::Error;

/// Errors from a friend store.
#[derive(Error, Debug)]
pub enum FriendStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Port for loading and saving friends.
pub trait FriendStore: Send + Sync {
    /// Friends saved by earlier runs, oldest first.
    fn load(&self) -> Result<Vec<Friend>, FriendStoreError>;

    /// Record one new friend.
    fn append(&self, friend: &Friend) -> Result<(), FriendStoreError>;

    /// Replace the stored list, e.g. after a removal.
    fn replace(&self, friends: &[Friend]) -> Result<(), FriendStoreError>;
}

/// Store that remembers nobody.
pub struct NoFriendStore;

impl FriendStore for NoFriendStore {
    fn load(&self) -> Result<Vec<Friend>, FriendStoreError> {
        Ok(Vec::new())
    }

    fn append(&self, _friend: &Friend) -> Result<(), FriendStoreError> {
        Ok(())
    }

    fn replace(&self, _friends: &[Friend]) -> Result<(), FriendStoreError> {
        Ok(())
    }
}
