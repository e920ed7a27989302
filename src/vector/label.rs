//! Text label icons built from a fixed SVG template.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::icon::{with_suffix, DEFAULT_COLOR, RENAMED_DIR};
use crate::raster::{label_name, LABEL_CANVAS};

use super::document::is_svg;
use super::recolor::generate_sizes;

/// The label template: a white square with a red border and the
/// label centered on it.
pub fn label_template(name: &str) -> String {
    let size = LABEL_CANVAS;
    format!(
        r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">
<rect x="0" y="0" width="{size}" height="{size}" stroke="red" stroke-width="3px" fill="white"/>
<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle">{label}</text>
</svg>"#,
        label = quick_xml::escape::escape(name),
    )
}

/// Write `<root>/renamed/<name>.svg` for `text` and its black size
/// variants. Returns the base path.
pub fn generate_label_icon(root: &Path, text: &str, sizes: &[u32]) -> Result<PathBuf> {
    let name = label_name(text);
    let svg = label_template(&name);

    let base = root.join(RENAMED_DIR).join(&name);
    let path = with_suffix(&base, ".svg");

    fs::write(&path, &svg)
        .map_err(|e| IconError::io(&path, format!("Failed to write SVG: {}", e)))?;

    if !is_svg(svg.as_bytes()) {
        return Err(IconError::InvalidSvg { path });
    }

    generate_sizes(&base, &path, DEFAULT_COLOR, sizes)?;
    Ok(base)
}
