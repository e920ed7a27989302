//! Text label icons drawn over a PNG template.
//!
//! The label is rasterized with resvg from a single `<text>` element and
//! composited over the template on a transparent 96x96 canvas.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{imageops, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::error::{IconError, Result};
use crate::icon::{with_suffix, RENAMED_DIR};

use super::resize::generate_sizes;

/// Side length of the label canvas in pixels.
pub const LABEL_CANVAS: u32 = 96;

/// File-safe name for a label: every `/` removed.
pub fn label_name(text: &str) -> String {
    text.replace('/', "")
}

/// Font size for a label, shrinking as the label gets longer.
pub fn font_size_for(name: &str) -> f32 {
    match name.len() {
        n if n > 12 => 8.0,
        n if n > 10 => 11.0,
        n if n > 8 => 12.0,
        n if n > 6 => 13.0,
        _ => 15.0,
    }
}

/// Draw `text` centered over `template` and write
/// `<root>/renamed/<name>.png` plus its resized variants.
///
/// `font` is loaded in addition to the system fonts. Returns the base.
pub fn generate_label_icon(
    root: &Path,
    text: &str,
    template: &Path,
    font: Option<&Path>,
) -> Result<PathBuf> {
    let name = label_name(text);

    let template_img = image::open(template)
        .map_err(|e| IconError::Image {
            path: template.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let mut canvas = RgbaImage::new(LABEL_CANVAS, LABEL_CANVAS);
    imageops::overlay(&mut canvas, &template_img, 0, 0);

    let text_layer = render_text(&name, font)?;
    imageops::overlay(&mut canvas, &text_layer, 0, 0);

    let base = root.join(RENAMED_DIR).join(&name);
    let path = with_suffix(&base, ".png");
    canvas.save(&path).map_err(|e| IconError::Image {
        path: path.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    generate_sizes(&base, &path)?;
    Ok(base)
}

fn render_text(name: &str, font: Option<&Path>) -> Result<RgbaImage> {
    let center = LABEL_CANVAS / 2;
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
            r#"<text x="{center}" y="{center}" font-family="Roboto, sans-serif" "#,
            r#"font-weight="900" font-size="{font_size}" dominant-baseline="middle" "#,
            r#"text-anchor="middle" fill="black">{label}</text></svg>"#,
        ),
        size = LABEL_CANVAS,
        center = center,
        font_size = font_size_for(name),
        label = quick_xml::escape::escape(name),
    );

    let mut options = usvg::Options::default();
    let fontdb = Arc::make_mut(&mut options.fontdb);
    if let Some(font) = font {
        fontdb
            .load_font_file(font)
            .map_err(|e| IconError::io(font, format!("Failed to load font: {}", e)))?;
    }
    fontdb.load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| IconError::Image {
        path: PathBuf::from(name),
        message: format!("Failed to render label text: {}", e),
    })?;

    let mut pixmap = Pixmap::new(LABEL_CANVAS, LABEL_CANVAS).ok_or_else(|| IconError::Image {
        path: PathBuf::from(name),
        message: "Failed to allocate label canvas".to_string(),
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let mut layer = RgbaImage::new(LABEL_CANVAS, LABEL_CANVAS);
    for (dst, src) in layer.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(layer)
}
