//! Configuration management
//!
//! There is no config file and no scan flag. Each binary picks a `Mode`
//! and the matching `ScanConfig` is built once at start-up from the
//! constants in `core::constants`.

use std::fmt;

use crate::core::constants::{dependency, globs, output};
use crate::core::error::Result;
use crate::discovery::FileGlob;
use crate::extraction::{Finder, VersionPattern};

/// Which historical behaviour to reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sources, manifests, CI files and lockfiles. Raw values, raw read errors.
    Legacy,
    /// Legacy globs plus Markdown and Dockerfiles. `v`-prefixed values, read
    /// errors name the file.
    Current,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Legacy => f.write_str("legacy"),
            Mode::Current => f.write_str("current"),
        }
    }
}

/// How a failed file read is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorPolicy {
    /// Propagate the IO error as is
    Raw,
    /// Wrap the IO error with the path of the file
    WithPath,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    mode: Mode,
    globs: Vec<FileGlob>,
    finder: Finder,
    prefix: &'static str,
    read_errors: ReadErrorPolicy,
}

impl ScanConfig {
    pub fn new(mode: Mode) -> Result<Self> {
        Self::for_dependency(mode, dependency::NAME)
    }

    /// Same presets as `new`, tracking another dependency name
    pub(crate) fn for_dependency(mode: Mode, name: &str) -> Result<Self> {
        let finder = Finder::new(vec![
            VersionPattern::toml_stanza(name)?,
            VersionPattern::inline_reference(name)?,
        ]);

        let config = match mode {
            Mode::Legacy => Self {
                mode,
                globs: FileGlob::all(&globs::LEGACY)?,
                finder,
                prefix: "",
                read_errors: ReadErrorPolicy::Raw,
            },
            Mode::Current => Self {
                mode,
                globs: FileGlob::all(&globs::CURRENT)?,
                finder,
                prefix: output::VERSION_PREFIX,
                read_errors: ReadErrorPolicy::WithPath,
            },
        };

        Ok(config)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn globs(&self) -> &[FileGlob] {
        &self.globs
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    pub fn prefix(&self) -> &str {
        self.prefix
    }

    pub fn read_errors(&self) -> ReadErrorPolicy {
        self.read_errors
    }
}
