//! Favorites merge core library
//!
//! This is the core library for favmerge. It discovers Ableton favorite-marker
//! sidecar files (`*.xmp`) across a list of input paths and groups them by file
//! name so that same-named files from different folders can be merged.

pub mod collector;
pub mod error;
pub mod groups;
pub mod pattern;
pub mod walk;

// Re-export main types
pub use collector::{CollectOptions, PathCollector, collect};
pub use error::{CollectError, Result};
pub use groups::{FileGroup, FileGroups};
pub use pattern::{CANDIDATE_PATTERN, CandidatePattern};
pub use walk::{TraversalDepth, is_root_level};
