//! Candidate file matching using glob patterns
//!
//! A candidate is any file whose base name matches `*.xmp`. Matching is
//! case-sensitive and only looks at the final path component.

use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

use crate::error::{CollectError, Result};

/// Glob every favorite-marker sidecar file name matches
pub const CANDIDATE_PATTERN: &str = "*.xmp";

/// Compiled matcher for candidate file names
#[derive(Debug, Clone)]
pub struct CandidatePattern {
    matcher: GlobMatcher,
}

impl CandidatePattern {
    /// Compile a candidate matcher from a glob pattern
    pub(crate) fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(false)
            .literal_separator(true)
            .build()
            .map_err(|e| CollectError::InvalidPattern(format!("{pattern}: {e}")))?;

        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// The `*.xmp` matcher used for favorite-marker sidecar files
    pub fn xmp() -> Result<Self> {
        Self::new(CANDIDATE_PATTERN)
    }

    /// Check whether the base name of `path` matches
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }

    /// The source glob
    pub fn glob(&self) -> &str {
        self.matcher.glob().glob()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_xmp_suffix() {
        let pattern = CandidatePattern::xmp().unwrap();

        assert!(pattern.matches(Path::new("b17d447d-894d-5b3e-96e9-a81dbf4d431c.xmp")));
        assert!(pattern.matches(Path::new("/path/to/file.xmp")));
        assert!(pattern.matches(Path::new("nested/dir/.xmp")));
        assert!(!pattern.matches(Path::new("wrong-name.txt")));
        assert!(!pattern.matches(Path::new("file.xmp.bak")));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let pattern = CandidatePattern::xmp().unwrap();

        assert!(!pattern.matches(Path::new("FILE.XMP")));
        assert!(!pattern.matches(Path::new("file.Xmp")));
    }

    #[test]
    fn test_only_base_name_is_matched() {
        let pattern = CandidatePattern::xmp().unwrap();

        // A directory component ending in .xmp does not make its children candidates
        assert!(!pattern.matches(Path::new("folder.xmp/readme.txt")));
        assert!(!pattern.matches(Path::new("")));
    }

    #[test]
    fn test_custom_pattern() {
        let pattern = CandidatePattern::new("*.adg").unwrap();
        assert_eq!(pattern.glob(), "*.adg");
        assert!(pattern.matches(Path::new("rack.adg")));
        assert!(!pattern.matches(Path::new("rack.xmp")));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = CandidatePattern::new("[unclosed");
        assert!(matches!(result, Err(CollectError::InvalidPattern(_))));
    }
}
