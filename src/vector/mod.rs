//! SVG icon generation.
//!
//! Icons are copied out of the upstream `svg/<name>/` layout into
//! `renamed/`, recolored, and written once per requested size.

mod document;
mod label;
mod pipeline;
mod recolor;

pub use document::{fill_style, is_svg, SvgDocument, SvgPath, SvgRect, SvgText, DEFAULT_VIEW_BOX};
pub use label::{generate_label_icon, label_template};
pub use pipeline::{generate_additional_icons, generate_icons};
pub use recolor::{generate_sizes, write_sizes};
