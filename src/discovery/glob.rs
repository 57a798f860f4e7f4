use ignore::types::{Types, TypesBuilder};
use std::fmt;
use std::path::Path;

use crate::core::constants::globs;
use crate::core::error::Result;

/// A filename glob such as `*.rs` or `Dockerfile`.
///
/// Only the file name of a path is matched, never its directory part, and
/// `*` also matches a leading dot.
#[derive(Clone, Debug)]
pub struct FileGlob {
    pattern: String,
    types: Types,
}

impl FileGlob {
    pub fn new(pattern: &str) -> Result<Self> {
        let mut builder = TypesBuilder::new();
        builder.add(globs::TYPE_NAME, pattern)?;
        builder.select(globs::TYPE_NAME);

        Ok(Self {
            pattern: pattern.to_string(),
            types: builder.build()?,
        })
    }

    /// Compile every glob in order, failing on the first invalid one
    pub fn all(patterns: &[&str]) -> Result<Vec<Self>> {
        patterns.iter().map(|pattern| Self::new(pattern)).collect()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        self.types.matched(path, false).is_whitelist()
    }

    /// File type matcher handed to the directory walker
    pub(crate) fn types(&self) -> Types {
        self.types.clone()
    }
}

impl fmt::Display for FileGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
