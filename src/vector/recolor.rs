//! Recolor an SVG icon and write it out once per size.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::icon::with_suffix;

use super::document::{is_svg, SvgDocument};

/// Read `source`, recolor it to `color`, and write
/// `<base>_<color><size>.svg` for every size.
///
/// An unreadable or unparsable source gives [`IconError::SvgSource`],
/// which callers treat as "skip this icon". Write failures and output
/// that does not validate as SVG are fatal.
pub fn generate_sizes(
    base: &Path,
    source: &Path,
    color: &str,
    sizes: &[u32],
) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(source).map_err(|e| IconError::SvgSource {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;

    let doc = SvgDocument::parse(&text).map_err(|message| IconError::SvgSource {
        path: source.to_path_buf(),
        message,
    })?;

    write_sizes(doc, base, color, sizes)
}

/// Recolor `doc` and write it at each size. See [`generate_sizes`].
pub fn write_sizes(
    mut doc: SvgDocument,
    base: &Path,
    color: &str,
    sizes: &[u32],
) -> Result<Vec<PathBuf>> {
    doc.recolor(color);
    doc.ensure_view_box();

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        doc.resize(size, size);

        let path = with_suffix(base, &format!("_{}{}.svg", color, size));
        let svg = doc.to_svg()?;

        fs::write(&path, &svg)
            .map_err(|e| IconError::io(&path, format!("Failed to write SVG: {}", e)))?;

        if !is_svg(svg.as_bytes()) {
            return Err(IconError::InvalidSvg { path });
        }

        written.push(path);
    }

    Ok(written)
}
