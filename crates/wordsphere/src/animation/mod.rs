//! Animation system for the word cloud

mod driver;

pub use driver::{AnimationDriver, DriverState, RotationStep};
