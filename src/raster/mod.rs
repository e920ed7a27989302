//! PNG icon generation.
//!
//! Icons are moved out of the upstream `png/black/<name>/` layout into
//! `renamed/` and downscaled to the fixed [`RASTER_SIZES`].

mod label;
mod pipeline;
mod resize;

pub use label::{font_size_for, generate_label_icon, label_name, LABEL_CANVAS};
pub use pipeline::{generate_additional_icons, generate_icons};
pub use resize::{generate_sizes, resize_variants, RASTER_SIZES};
