//! Selection of which candidate archives take part in a merge.
//!
//! Exclusion is a case-insensitive substring match against the file's base
//! name only, never its directory. The default set keeps test-harness and
//! benchmark archives out of the shipped artifact.

use std::path::{Path, PathBuf};

/// Patterns excluded by default: test-only code must never reach the merged
/// archive.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["test", "benchmark", "gmock", "gtest"];

/// A set of case-insensitive substring patterns matched against base names.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PATTERNS.iter().copied())
    }
}

impl ExclusionRules {
    /// Rules from explicit patterns; each is lowercased once up front.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { patterns: patterns.into_iter().map(|p| p.as_ref().to_lowercase()).collect() }
    }

    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Add one more pattern to this rule set.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns.push(pattern.to_lowercase());
        self
    }

    /// The lowercase patterns currently in force, in match order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `path`'s base name matches at least one pattern.
    pub fn excludes(&self, path: &Path) -> bool {
        let base = path
            .file_name()
            .map(|os| os.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.patterns.iter().any(|p| base.contains(p))
    }
}

/// Drop every candidate whose base name matches an exclusion pattern.
///
/// Input order is preserved; downstream member ordering is derived from
/// member names, not from archive discovery order, so no sort happens here.
/// An empty candidate list yields an empty result.
pub fn select_archives<P: AsRef<Path>>(candidates: &[P], rules: &ExclusionRules) -> Vec<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref().to_path_buf())
        .filter(|p| !rules.excludes(p))
        .collect()
}
