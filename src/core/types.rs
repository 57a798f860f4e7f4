use std::fmt;

/// Counters collected over one scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    files_scanned: usize,
    versions_found: usize,
}

impl ScanSummary {
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn versions_found(&self) -> usize {
        self.versions_found
    }

    pub(crate) fn record_file(&mut self, versions: usize) {
        self.files_scanned += 1;
        self.versions_found += versions;
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} version(s) in {} file(s)",
            self.versions_found, self.files_scanned
        )
    }
}
