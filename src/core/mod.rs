//! Core types and foundational components
//!
//! This module contains the error type, the scan counters and the
//! constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{Result, VersionsError};
pub use types::ScanSummary;
