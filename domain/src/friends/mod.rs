//! Friends made through verified meetups.

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Someone met in person and confirmed by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    name: String,
    added_at: DateTime<Utc>,
}

impl Friend {
    pub fn new(name: impl Into<String>, added_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            added_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

/// The friends tab, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendList {
    friends: Vec<Friend>,
}

impl FriendList {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f.name == name)
    }

    /// Add `friend` unless someone with the same name is already listed.
    /// Returns whether the list changed.
    pub fn add(&mut self, friend: Friend) -> bool {
        if self.contains(&friend.name) {
            return false;
        }
        self.friends.push(friend);
        true
    }

    /// Remove the friend at a 1-based `position`, as listed.
    pub fn remove(&mut self, position: usize) -> Result<Friend, DomainError> {
        if position == 0 || position > self.friends.len() {
            return Err(DomainError::NoSuchFriend {
                position,
                count: self.friends.len(),
            });
        }
        Ok(self.friends.remove(position - 1))
    }
}
