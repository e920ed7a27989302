//! Structural model of an icon SVG.
//!
//! Only what the icon sets use is modelled: root sizing attributes, the
//! `path` list, and the optional `rect`/`text` pair used by label
//! templates. Anything else in the source is dropped on re-serialization.

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// viewBox used when the source document has none.
pub const DEFAULT_VIEW_BOX: &str = "0 0 100 100";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "svg")]
pub struct SvgDocument {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "@width", default)]
    pub width: String,
    #[serde(rename = "@height", default)]
    pub height: String,
    #[serde(rename = "@viewBox", default)]
    pub view_box: String,
    #[serde(rename = "path", default)]
    pub paths: Vec<SvgPath>,
    #[serde(
        rename = "rect",
        default,
        deserialize_with = "last_element",
        skip_serializing_if = "Option::is_none"
    )]
    pub rect: Option<SvgRect>,
    #[serde(
        rename = "text",
        default,
        deserialize_with = "last_element",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<SvgText>,
}

/// Repeated single elements are accepted; the last one wins.
fn last_element<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let elements: Vec<T> = Vec::deserialize(deserializer)?;
    Ok(elements.into_iter().last())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgPath {
    #[serde(rename = "@opacity", default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(rename = "@d", default)]
    pub d: String,
    #[serde(rename = "@style", default, skip_serializing_if = "String::is_empty")]
    pub style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgRect {
    #[serde(rename = "@x", default)]
    pub x: String,
    #[serde(rename = "@y", default)]
    pub y: String,
    #[serde(rename = "@width", default)]
    pub width: String,
    #[serde(rename = "@height", default)]
    pub height: String,
    #[serde(rename = "@stroke", default)]
    pub stroke: String,
    #[serde(rename = "@stroke-width", default)]
    pub stroke_width: String,
    #[serde(rename = "@fill", default)]
    pub fill: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgText {
    #[serde(rename = "@x", default)]
    pub x: String,
    #[serde(rename = "@y", default)]
    pub y: String,
    #[serde(rename = "@dominant-baseline", default)]
    pub dominant_baseline: String,
    #[serde(rename = "@text-anchor", default)]
    pub text_anchor: String,
    #[serde(rename = "$text", default)]
    pub content: String,
}

impl SvgDocument {
    /// Parse an SVG document. The root element must be `<svg>`.
    pub fn parse(source: &str) -> std::result::Result<Self, String> {
        if !is_svg(source.as_bytes()) {
            return Err("expected a well-formed document with an <svg> root".to_string());
        }
        quick_xml::de::from_str(source).map_err(|e| e.to_string())
    }

    /// Serialize back to SVG markup.
    pub fn to_svg(&self) -> Result<String> {
        quick_xml::se::to_string(self).map_err(|e| IconError::Encode { message: e.to_string() })
    }

    /// Give every path the single fill `color`, dropping any prior style.
    pub fn recolor(&mut self, color: &str) {
        let style = fill_style(color);
        for path in &mut self.paths {
            path.style = style.clone();
        }
    }

    /// Fill in [`DEFAULT_VIEW_BOX`] when the document has no viewBox.
    pub fn ensure_view_box(&mut self) {
        if self.view_box.is_empty() {
            self.view_box = DEFAULT_VIEW_BOX.to_string();
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.to_string();
        self.height = height.to_string();
    }
}

/// Style attribute value for a fill color: `fill: red;`.
pub fn fill_style(color: &str) -> String {
    format!("fill: {};", color)
}

/// Whether `bytes` is a well-formed XML document whose root is `<svg>`.
pub fn is_svg(bytes: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return false;
    };
    match roxmltree::Document::parse(text) {
        Ok(doc) => doc.root_element().tag_name().name() == "svg",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HOME: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">"#,
        r#"<path d="M0 0h24v24H0V0z" fill="none"/>"#,
        r#"<path d="M12 3L2 12h3v8h6v-6h2v6h6v-8h3L12 3z" opacity=".3"/>"#,
        r#"<path d="M10 20v-6h4v6" style="fill: #333; stroke: red"/></svg>"#,
    );

    #[test]
    fn test_parse_material_icon() {
        let doc = SvgDocument::parse(HOME).unwrap();

        assert_eq!(doc.xmlns, "http://www.w3.org/2000/svg");
        assert_eq!(doc.width, "24");
        assert_eq!(doc.view_box, "0 0 24 24");
        assert_eq!(doc.paths.len(), 3);
        assert_eq!(doc.paths[1].opacity.as_deref(), Some(".3"));
        assert_eq!(doc.paths[2].style, "fill: #333; stroke: red");
        assert!(doc.rect.is_none());
        assert!(doc.text.is_none());
    }

    #[test]
    fn test_recolor_replaces_every_style() {
        let mut doc = SvgDocument::parse(HOME).unwrap();
        doc.recolor("red");

        for path in &doc.paths {
            assert_eq!(path.style, "fill: red;");
        }
    }

    #[test]
    fn test_recolor_is_stable() {
        let mut once = SvgDocument::parse(HOME).unwrap();
        once.recolor("blue");
        once.resize(32, 32);

        let mut twice = once.clone();
        twice.recolor("blue");
        twice.resize(32, 32);

        assert_eq!(once, twice);
        assert_eq!(once.to_svg().unwrap(), twice.to_svg().unwrap());
    }

    #[test]
    fn test_missing_view_box_defaults() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;
        let mut doc = SvgDocument::parse(source).unwrap();
        doc.ensure_view_box();
        assert_eq!(doc.view_box, "0 0 100 100");

        let mut kept = SvgDocument::parse(HOME).unwrap();
        kept.ensure_view_box();
        assert_eq!(kept.view_box, "0 0 24 24");
    }

    #[test]
    fn test_serialized_output_round_trips() {
        let mut doc = SvgDocument::parse(HOME).unwrap();
        doc.recolor("green");
        doc.resize(48, 48);

        let svg = doc.to_svg().unwrap();

        assert!(is_svg(svg.as_bytes()));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="48""#));
        assert!(svg.contains(r#"height="48""#));
        assert!(svg.contains(r#"style="fill: green;""#));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<text"));
        assert_eq!(SvgDocument::parse(&svg).unwrap(), doc);
    }

    #[test]
    fn test_label_template_keeps_rect_and_text() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="96" height="96">
<rect x="0" y="0" width="96" height="96" stroke="red" stroke-width="3px" fill="white"/>
<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle">DNS</text>
</svg>"#;

        let doc = SvgDocument::parse(source).unwrap();
        let rect = doc.rect.as_ref().unwrap();
        let text = doc.text.as_ref().unwrap();

        assert_eq!(rect.stroke_width, "3px");
        assert_eq!(text.content, "DNS");
        assert_eq!(text.text_anchor, "middle");

        let svg = doc.to_svg().unwrap();
        assert!(svg.contains("<rect"));
        assert!(svg.contains(">DNS</text>"));
    }

    #[test]
    fn test_repeated_rect_keeps_last() {
        let source = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">"#,
            r#"<rect fill="none" width="24" height="24"/>"#,
            r#"<rect x="4" y="4" width="16" height="16"/>"#,
            r#"<path d="M3 3h18v18H3z"/></svg>"#,
        );

        let doc = SvgDocument::parse(source).unwrap();
        let rect = doc.rect.as_ref().unwrap();

        assert_eq!(rect.x, "4");
        assert_eq!(rect.width, "16");
        assert_eq!(doc.paths.len(), 1);

        let svg = doc.to_svg().unwrap();
        assert_eq!(svg.matches("<rect").count(), 1);
    }

    #[test]
    fn test_repeated_text_keeps_last() {
        let source = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
            r#"<text x="1">old</text><text x="2">new</text></svg>"#,
        );

        let doc = SvgDocument::parse(source).unwrap();

        assert_eq!(doc.text.unwrap().content, "new");
    }

    #[test]
    fn test_parse_rejects_non_svg() {
        assert!(SvgDocument::parse("<html><body/></html>").is_err());
        assert!(SvgDocument::parse("<svg><path d=\"M0 0\"></svg>").is_err());
        assert!(SvgDocument::parse("not xml at all").is_err());
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#));
        assert!(!is_svg(b"<svg>"));
        assert!(!is_svg(b"<png/>"));
        assert!(!is_svg(&[0xff, 0xfe, 0x00]));
    }
}
