//! Terminal application host

mod runner;

pub use runner::{CloudRunner, RunnerCommand};
