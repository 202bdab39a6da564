//! Grid artwork path resolution — WHERE artwork lives
//!
//! Steam reads custom artwork from `userdata/<profile>/config/grid`, keyed
//! by app ID plus a per-slot filename suffix. This module maps IDs to those
//! locations and performs the copy-only apply step; it never touches pixel
//! data or the network.

pub mod operations;
pub mod types;

pub use operations::{apply_art, grid_dirs, installed_art, target_grid_dir};
pub use types::{ALL_ART_KINDS, ArtKind};
