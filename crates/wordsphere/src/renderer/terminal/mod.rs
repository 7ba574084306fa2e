//! Terminal backend implementation for the word cloud

mod backend;
mod grid;

pub use backend::TerminalBackend;
pub use grid::CellMetrics;
