//! Directory walking for candidate discovery
//!
//! One walk function covers both traversal depths. Entries come back in the
//! order the filesystem lists them; nothing is sorted or walked in parallel.
//! The walker owns its directory handles and releases them when dropped, so an
//! early return on error closes everything that was opened.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CollectError, Result};
use crate::pattern::CandidatePattern;

/// How deep to look below an input directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalDepth {
    /// Direct children only
    #[default]
    Shallow,
    /// The full subtree
    Deep,
}

impl TraversalDepth {
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive { Self::Deep } else { Self::Shallow }
    }

    pub fn is_recursive(self) -> bool {
        matches!(self, Self::Deep)
    }
}

/// Whether `candidate` lives directly inside `root` rather than in a subdirectory
pub fn is_root_level(candidate: &Path, root: &Path) -> bool {
    candidate.parent() == Some(root)
}

/// Walk `root` and return every candidate file in listing order
///
/// Symbolic links to directories are not descended into; a symbolic link that
/// resolves to a regular file is a candidate like any other file.
pub(crate) fn walk_candidates(
    root: &Path,
    depth: TraversalDepth,
    pattern: &CandidatePattern,
) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if depth == TraversalDepth::Shallow {
        walker = walker.max_depth(1);
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| CollectError::Io {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if !pattern.matches(entry.path()) {
            continue;
        }

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_directory() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::write(base.join("top.xmp"), b"<x/>").unwrap();
        fs::write(base.join("notes.txt"), b"text").unwrap();

        let subdir = base.join("a");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("nested.xmp"), b"<x/>").unwrap();

        let deeper = subdir.join("b");
        fs::create_dir(&deeper).unwrap();
        fs::write(deeper.join("deepest.xmp"), b"<x/>").unwrap();

        // A directory whose name looks like a candidate
        fs::create_dir(base.join("folder.xmp")).unwrap();

        dir
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_shallow_walk_only_sees_direct_children() {
        let dir = create_test_directory();
        let pattern = CandidatePattern::xmp().unwrap();

        let found = walk_candidates(dir.path(), TraversalDepth::Shallow, &pattern).unwrap();
        assert_eq!(names(&found), vec!["top.xmp"]);
    }

    #[test]
    fn test_deep_walk_sees_whole_subtree() {
        let dir = create_test_directory();
        let pattern = CandidatePattern::xmp().unwrap();

        let found = walk_candidates(dir.path(), TraversalDepth::Deep, &pattern).unwrap();
        assert_eq!(names(&found), vec!["deepest.xmp", "nested.xmp", "top.xmp"]);
    }

    #[test]
    fn test_walk_is_repeatable() {
        let dir = create_test_directory();
        let pattern = CandidatePattern::xmp().unwrap();

        let first = walk_candidates(dir.path(), TraversalDepth::Deep, &pattern).unwrap();
        let second = walk_candidates(dir.path(), TraversalDepth::Deep, &pattern).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_level_predicate() {
        let root = Path::new("scan/root");

        assert!(is_root_level(Path::new("scan/root/f2.xmp"), root));
        assert!(!is_root_level(Path::new("scan/root/a/f1.xmp"), root));
        assert!(!is_root_level(Path::new("elsewhere/f2.xmp"), root));
    }

    #[test]
    fn test_root_level_predicate_for_current_dir() {
        let root = Path::new(".");

        assert!(is_root_level(Path::new("./f2.xmp"), root));
        assert!(!is_root_level(Path::new("./a/f1.xmp"), root));
    }

    #[test]
    fn test_depth_from_recursive() {
        assert_eq!(TraversalDepth::from_recursive(true), TraversalDepth::Deep);
        assert_eq!(TraversalDepth::from_recursive(false), TraversalDepth::Shallow);
        assert!(TraversalDepth::Deep.is_recursive());
        assert!(!TraversalDepth::Shallow.is_recursive());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_candidate() {
        let dir = create_test_directory();
        let pattern = CandidatePattern::xmp().unwrap();
        std::os::unix::fs::symlink(dir.path().join("top.xmp"), dir.path().join("link.xmp"))
            .unwrap();

        let found = walk_candidates(dir.path(), TraversalDepth::Shallow, &pattern).unwrap();
        assert_eq!(names(&found), vec!["link.xmp", "top.xmp"]);
    }

    #[test]
    fn test_walk_error_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let pattern = CandidatePattern::xmp().unwrap();

        let error = walk_candidates(&missing, TraversalDepth::Deep, &pattern).unwrap_err();
        assert!(matches!(error, CollectError::Io { .. }));
        assert_eq!(error.path(), Some(missing.as_path()));
        assert!(error.is_filesystem());
    }
}
