//! Progress display

pub mod splash;
