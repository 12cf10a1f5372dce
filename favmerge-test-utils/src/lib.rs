//! Test utilities for favmerge
//!
//! This crate provides fixture builders for laying out trees of favorite-marker
//! sidecar files in temporary directories.

pub mod builders;
pub mod cwd;

// Re-export commonly used types
pub use builders::{SidecarTree, SidecarTreeBuilder, favorites_xmp};
pub use cwd::CurrentDirGuard;
