//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod app_controller;
pub mod present_match;
pub mod quiz_controller;
pub mod splash_timer;
pub mod tagline_ticker;
pub mod verify_arrival;
