//! Include/exclude pattern matching for relative paths

use glob::{MatchOptions, Pattern};

use crate::config::ReportConfig;
use crate::error::{Error, Result};

/// `*` stops at path separators, `**` crosses them, and dotfiles are
/// eligible for wildcard matching (no implicit leading-dot protection).
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled include/exclude rules for one invocation.
///
/// Compilation happens once; a malformed glob is a configuration error and
/// fails the whole invocation before traversal starts.
#[derive(Debug)]
pub struct PatternFilter {
    exclude: Vec<Pattern>,
    include: Vec<Pattern>,
    content_exclude: Vec<Pattern>,
}

impl PatternFilter {
    pub fn compile(config: &ReportConfig) -> Result<Self> {
        Ok(Self {
            exclude: compile_patterns(&config.exclude)?,
            include: compile_patterns(&config.include)?,
            content_exclude: compile_patterns(&config.content_exclude)?,
        })
    }

    /// Decide whether `relative_path` is pruned from the tree.
    ///
    /// With a non-empty include set, a path survives by matching an include
    /// glob or by being an ancestor of one: the path plus a trailing `/` is
    /// compared as a literal prefix of the raw pattern text. That lets the
    /// walk descend into `src` on the way to `src/deep/mod.rs`. The prefix
    /// test is textual, not a glob evaluation, so a wildcard segment above
    /// the pattern's leaf defeats it.
    ///
    /// Paths that survive inclusion are still subject to the exclude set.
    pub fn should_exclude(&self, relative_path: &str) -> bool {
        if !self.include.is_empty()
            && !matches_any(&self.include, relative_path)
            && !self.is_ancestor_of_include(relative_path)
        {
            return true;
        }
        matches_any(&self.exclude, relative_path)
    }

    /// Content exclusion is independent of structure exclusion: a file can
    /// keep its tree entry while its content is replaced by a sentinel.
    pub fn should_exclude_content(&self, relative_path: &str) -> bool {
        matches_any(&self.content_exclude, relative_path)
    }

    /// Effective exclude pattern texts, for the patterns header.
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.exclude.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Effective include pattern texts, for the patterns header.
    pub fn include_patterns(&self) -> Vec<String> {
        self.include.iter().map(|p| p.as_str().to_string()).collect()
    }

    fn is_ancestor_of_include(&self, relative_path: &str) -> bool {
        let prefix = format!("{}/", relative_path.replace('\\', "/"));
        self.include
            .iter()
            .any(|p| p.as_str().replace('\\', "/").starts_with(&prefix))
    }
}

fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    patterns
        .iter()
        .any(|p| p.matches_with(path, MATCH_OPTIONS))
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}
