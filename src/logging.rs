use crate::config::Mode;
use crate::core::ScanSummary;
use crate::core::constants::defaults;
use crate::discovery::FileGlob;
use log::{debug, info, warn};
use std::path::Path;

/// Initialize the logger. `RUST_LOG` overrides the default `warn` filter.
///
/// Records go to stderr so they never mix with the versions on stdout.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or(defaults::LOG_FILTER);

    // try_init fails once a logger is already set
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized");
}

/// Log the start of a scan
pub fn log_scan_start(mode: Mode, root: &Path, globs: &[FileGlob]) {
    let globs: Vec<&str> = globs.iter().map(FileGlob::pattern).collect();
    info!(
        "Scanning '{}' in {mode} mode for {}",
        root.display(),
        globs.join(", ")
    );
}

/// Log the start of one glob's walk
pub fn log_glob_start(glob: &FileGlob) {
    debug!("Walking for '{glob}'");
}

/// Log a scanned file and how many versions it contained
pub fn log_file_scanned(path: &Path, versions: usize) {
    debug!("  {} -> {versions} version(s)", path.display());
}

/// Log a directory entry the walker could not read
pub fn log_skipped_entry(err: &ignore::Error) {
    warn!("Skipping unreadable entry: {err}");
}

/// Log scan completion
pub fn log_scan_complete(summary: &ScanSummary) {
    info!("Scan complete: {summary}");
}

/// Log the cause chain of an aborted scan. The error itself is reported on stderr by the caller.
pub fn log_scan_aborted(err: &dyn std::error::Error) {
    let mut source = err.source();
    while let Some(cause) = source {
        debug!("Scan aborted, caused by: {cause}");
        source = cause.source();
    }
}
