//! File discovery
//!
//! This module handles filename globs and the recursive directory
//! walk that yields the files to scan.

pub mod glob;
pub mod walker;

// Re-export commonly used items
pub use glob::FileGlob;
pub use walker::{display_path, matching_files};
