//! Local storage adapters.
//!
//! Provides [`JsonlAnswerStore`] and [`JsonlFriendStore`], which implement
//! the [`AnswerStore`](spark_application::AnswerStore) and
//! [`FriendStore`](spark_application::FriendStore) ports.

mod jsonl_answer_store;
mod jsonl_friend_store;

pub use jsonl_answer_store::JsonlAnswerStore;
pub use jsonl_friend_store::JsonlFriendStore;
