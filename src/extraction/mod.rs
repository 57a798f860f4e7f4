//! Version extraction
//!
//! This module holds the version patterns and the finder that
//! applies them to a file's contents.

pub mod finder;
pub mod pattern;

// Re-export commonly used items
pub use finder::{Finder, VersionFinder};
pub use pattern::VersionPattern;
