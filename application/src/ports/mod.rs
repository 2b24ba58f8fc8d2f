//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod answer_store;
pub mod camera;
pub mod clock;
pub mod friend_store;
pub mod observer;
pub mod ui_event;
