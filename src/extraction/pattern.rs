use regex::Regex;
use std::fmt;

use crate::core::constants::patterns;
use crate::core::error::Result;

/// A regex with exactly one capture group holding a version string.
#[derive(Clone, Debug)]
pub struct VersionPattern {
    name: &'static str,
    regex: Regex,
}

impl VersionPattern {
    /// Build a pattern from a template, substituting the escaped dependency name
    pub fn from_template(name: &'static str, template: &str, dependency: &str) -> Result<Self> {
        let source = template.replace(patterns::NAME_PLACEHOLDER, &regex::escape(dependency));
        Ok(Self {
            name,
            regex: Regex::new(&source)?,
        })
    }

    /// A `<dependency>"` line followed by a `version = "<value>"` line
    pub fn toml_stanza(dependency: &str) -> Result<Self> {
        Self::from_template("toml_stanza", patterns::TOML_STANZA, dependency)
    }

    /// `<dependency>:v<value>` or `<dependency>@v<value>`
    pub fn inline_reference(dependency: &str) -> Result<Self> {
        Self::from_template("inline_reference", patterns::INLINE_REFERENCE, dependency)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every non-overlapping capture across the whole text, left to right
    pub fn captures<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl fmt::Display for VersionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.regex.as_str())
    }
}
