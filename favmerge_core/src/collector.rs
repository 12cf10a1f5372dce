//! Path collector
//!
//! Turns a list of input paths into a [`FileGroups`] mapping. Each input is
//! either a directory, which is walked for `*.xmp` files, or a single `*.xmp`
//! file. Inputs are processed strictly in order and the first invalid one
//! aborts the whole call.

use std::path::Path;

use crate::error::{CollectError, Result};
use crate::groups::{FileGroups, group_key};
use crate::pattern::CandidatePattern;
use crate::walk::{TraversalDepth, is_root_level, walk_candidates};

/// Options for path collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
    /// How far below each input directory to look
    pub depth: TraversalDepth,
    /// Skip candidates directly inside an input directory (only with `Deep`)
    pub exclude_root: bool,
}

impl CollectOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set recursive processing
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.depth = TraversalDepth::from_recursive(recursive);
        self
    }

    /// Set traversal depth directly
    pub fn with_depth(mut self, depth: TraversalDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set whether root-level candidates are skipped
    pub fn with_exclude_root(mut self, exclude_root: bool) -> Self {
        self.exclude_root = exclude_root;
        self
    }

    /// Root exclusion only applies to recursive scans
    fn skips_root_level(&self) -> bool {
        self.exclude_root && self.depth.is_recursive()
    }
}

/// Collects and groups candidate files under one traversal policy
#[derive(Debug, Clone)]
pub struct PathCollector {
    options: CollectOptions,
    pattern: CandidatePattern,
}

impl PathCollector {
    /// Create a collector matching `*.xmp` files
    pub fn new(options: CollectOptions) -> Result<Self> {
        Ok(Self {
            options,
            pattern: CandidatePattern::xmp()?,
        })
    }

    pub fn options(&self) -> CollectOptions {
        self.options
    }

    /// Collect and group every candidate reachable from `paths`
    pub fn collect<P: AsRef<Path>>(&self, paths: &[P]) -> Result<FileGroups> {
        let mut groups = FileGroups::new();

        for path in paths {
            self.collect_path(path.as_ref(), &mut groups)?;
        }

        if groups.is_empty() {
            log::debug!("No candidates found in {} input path(s)", paths.len());
            return Err(CollectError::EmptyResult);
        }

        log::debug!(
            "Collected {} file(s) in {} group(s)",
            groups.file_count(),
            groups.len()
        );
        Ok(groups)
    }

    fn collect_path(&self, path: &Path, groups: &mut FileGroups) -> Result<()> {
        // exists() follows symlinks, so a dangling link is reported as missing
        if !path.exists() {
            return Err(CollectError::NotFound(path.to_path_buf()));
        }

        if path.is_dir() {
            log::debug!("Scanning directory {} ({:?})", path.display(), self.options.depth);
            for candidate in walk_candidates(path, self.options.depth, &self.pattern)? {
                if self.options.skips_root_level() && is_root_level(&candidate, path) {
                    log::trace!("Skipping root-level {}", candidate.display());
                    continue;
                }
                if let Some(name) = group_key(&candidate) {
                    groups.push(name, candidate);
                }
            }
            Ok(())
        } else if path.is_file() {
            if !self.pattern.matches(path) {
                return Err(CollectError::InvalidFormat(path.to_path_buf()));
            }
            log::debug!("Adding file {}", path.display());
            if let Some(name) = group_key(path) {
                groups.push(name, path.to_path_buf());
            }
            Ok(())
        } else {
            // FIFOs, sockets and devices are not collectable inputs
            Err(CollectError::NotFound(path.to_path_buf()))
        }
    }
}

/// Collect `*.xmp` files from `paths` and group them by file name
///
/// Fails with [`CollectError::NotFound`] for a missing input,
/// [`CollectError::InvalidFormat`] for a non-`*.xmp` file input, and
/// [`CollectError::EmptyResult`] when nothing was found at all.
pub fn collect<P: AsRef<Path>>(
    paths: &[P],
    recursive: bool,
    exclude_root: bool,
) -> Result<FileGroups> {
    let options = CollectOptions::new()
        .with_recursive(recursive)
        .with_exclude_root(exclude_root);
    PathCollector::new(options)?.collect(paths)
}
