//! Fixture builders

mod sidecar_tree;

pub use sidecar_tree::{SidecarTree, SidecarTreeBuilder, favorites_xmp};
