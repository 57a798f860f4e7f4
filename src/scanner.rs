use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::{ReadErrorPolicy, ScanConfig};
use crate::core::ScanSummary;
use crate::core::constants::defaults;
use crate::core::error::{Result, VersionsError};
use crate::discovery::{display_path, matching_files};
use crate::extraction::VersionFinder;
use crate::logging;
use crate::output::write_version;

/// Walk `root` once per glob and write every version found to `out`.
///
/// Globs form the outer loop and files the inner one, so a file matching
/// two globs is scanned twice. Versions are written as soon as they are
/// found. The first unreadable file ends the scan with an error and
/// anything already written stays written.
pub fn scan<W: Write>(config: &ScanConfig, root: &Path, out: &mut W) -> Result<ScanSummary> {
    logging::log_scan_start(config.mode(), root, config.globs());
    let mut summary = ScanSummary::default();

    for glob in config.globs() {
        logging::log_glob_start(glob);

        for path in matching_files(root, glob) {
            let text = read_file(config, root, &path)?;
            let versions = config.finder().find_versions(&text);

            for version in &versions {
                write_version(out, config.prefix(), version)?;
            }

            logging::log_file_scanned(display_path(root, &path), versions.len());
            summary.record_file(versions.len());
        }
    }

    out.flush()?;
    logging::log_scan_complete(&summary);
    Ok(summary)
}

/// Scan the current directory and write to stdout
pub fn run(config: &ScanConfig) -> Result<ScanSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scan(config, Path::new(defaults::SCAN_ROOT), &mut out)
}

fn read_file(config: &ScanConfig, root: &Path, path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(normalize_newlines)
        .map_err(|err| match config.read_errors() {
            ReadErrorPolicy::Raw => VersionsError::Io(err),
            ReadErrorPolicy::WithPath => VersionsError::file_read(display_path(root, path), err),
        })
}

/// Text-mode line endings: `\r\n` and lone `\r` both become `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
