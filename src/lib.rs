pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod input;

pub use error::{Result, TsortError};
pub use graph::DependencyGraph;
