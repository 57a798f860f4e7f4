//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! The dependency being tracked, the file globs each mode walks and the
//! regex templates used to pull version strings out of file contents.

/// Tracked dependency
pub mod dependency {
    /// Name of the dependency whose versions are listed
    pub const NAME: &str = "filesfinder";
}

/// File globs, matched against the file name of every walked entry
pub mod globs {
    /// Globs scanned by the legacy mode, in walk order
    pub const LEGACY: [&str; 4] = ["*.rs", "*.toml", "*.yml", "*.lock"];

    /// Globs scanned by the current mode, in walk order
    pub const CURRENT: [&str; 6] = ["*.rs", "*.toml", "*.yml", "*.lock", "*.md", "Dockerfile"];

    /// Type name registered with the walker's file type matcher
    pub const TYPE_NAME: &str = "scanned";
}

/// Regex templates. `{name}` is replaced by the escaped dependency name.
pub mod patterns {
    /// Placeholder substituted with the dependency name
    pub const NAME_PLACEHOLDER: &str = "{name}";

    /// `<name>"` line directly followed by a `version = "<value>"` line
    pub const TOML_STANZA: &str = r#"{name}"\nversion = "(.*)""#;

    /// `<name>:v<value>` or `<name>@v<value>`, up to the end of the line
    pub const INLINE_REFERENCE: &str = r"{name}[:@]v(.*)";
}

/// Output formatting
pub mod output {
    /// Prefix written before every version in the current mode
    pub const VERSION_PREFIX: &str = "v";
}

/// Default values for the ambient runtime
pub mod defaults {
    /// Log filter used when `RUST_LOG` is unset
    pub const LOG_FILTER: &str = "warn";

    /// Directory every scan starts from
    pub const SCAN_ROOT: &str = ".";
}
