use crate::extraction::pattern::VersionPattern;

pub trait VersionFinder {
    /// Every version captured in `text`, pattern by pattern, each pattern left to right
    fn find_versions<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

#[derive(Clone, Debug, Default)]
pub struct Finder {
    patterns: Vec<VersionPattern>,
}

impl Finder {
    pub fn new(patterns: Vec<VersionPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[VersionPattern] {
        &self.patterns
    }
}

impl VersionFinder for Finder {
    fn find_versions<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures(text))
            .collect()
    }
}
