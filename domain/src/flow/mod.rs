//! Navigation between the app's screens.

pub mod screen;
