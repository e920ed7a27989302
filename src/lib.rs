//! icongen - Icon set generator
//!
//! Fetches an upstream icon repository, renames the icons into a flat
//! `renamed/` directory, and writes resized PNG and recolored SVG
//! variants, calling an optional hook for every icon generated.

pub mod cli;
pub mod config;
pub mod error;
pub mod icon;
pub mod manifest;
pub mod output;
pub mod raster;
pub mod repo;
pub mod transfer;
pub mod vector;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{IconError, Result};
pub use icon::{ColorVariants, Hook, IconRecord, SubsetMap, DEFAULT_COLOR, RENAMED_DIR};
pub use manifest::{GenerationManifest, ManifestEntry};
pub use raster::RASTER_SIZES;
pub use repo::{
    sync_repository, GitCli, PullStatus, RepoSync, SyncOutcome, DEFAULT_PNG_URL, DEFAULT_SVG_URL,
};
pub use vector::SvgDocument;
