//! User interface
//!
//! Argument parsing and the shared entry point of both binaries.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, parse_args, run_mode};
