use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error types for list-versions operations
#[derive(Debug)]
pub enum VersionsError {
    /// IO error (file reads in legacy mode, writing output)
    Io(io::Error),

    /// File read error carrying the path of the offending file
    FileRead { path: PathBuf, source: io::Error },

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Regex compilation error
    Regex(regex::Error),
}

impl VersionsError {
    /// Wrap a read failure with the path of the file that could not be read
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VersionsError::FileRead {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for VersionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionsError::Io(err) => write!(f, "IO error: {err}"),
            VersionsError::FileRead { path, source } => {
                write!(f, "Could not read file '{}': {source}", path.display())
            }
            VersionsError::FileWalking(err) => write!(f, "File walking error: {err}"),
            VersionsError::Regex(err) => write!(f, "Regex error: {err}"),
        }
    }
}

impl std::error::Error for VersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VersionsError::Io(err) => Some(err),
            VersionsError::FileRead { source, .. } => Some(source),
            VersionsError::FileWalking(err) => Some(err),
            VersionsError::Regex(err) => Some(err),
        }
    }
}

impl From<io::Error> for VersionsError {
    fn from(err: io::Error) -> Self {
        VersionsError::Io(err)
    }
}

impl From<ignore::Error> for VersionsError {
    fn from(err: ignore::Error) -> Self {
        VersionsError::FileWalking(err)
    }
}

impl From<regex::Error> for VersionsError {
    fn from(err: regex::Error) -> Self {
        VersionsError::Regex(err)
    }
}

/// Type alias for Results using VersionsError
pub type Result<T> = std::result::Result<T, VersionsError>;
