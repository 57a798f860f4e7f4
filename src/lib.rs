//! List every version of a tracked dependency referenced in a source tree.
//!
//! The scanner walks the tree once per filename glob, runs a fixed set of
//! version patterns over each matching file's full contents and writes
//! every capture, one per line.

pub mod config;
pub mod core;
pub mod discovery;
pub mod extraction;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod ui;

// Re-export commonly used items
pub use crate::config::{Mode, ReadErrorPolicy, ScanConfig};
pub use crate::core::{Result, ScanSummary, VersionsError};
pub use crate::scanner::{run, scan};
