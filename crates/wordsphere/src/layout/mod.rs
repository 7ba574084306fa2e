//! Label layout on the sphere
//!
//! Partitions a word list into latitude rings and seeds every label's angles.

mod label;
pub mod rings;

pub use label::Label;
pub use rings::{layout, RingPlan};
