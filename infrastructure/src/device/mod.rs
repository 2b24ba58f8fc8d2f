//! Device adapters: system clock and camera permission.

mod camera;
mod clock;

pub use camera::ConfiguredCamera;
pub use clock::SystemClock;
