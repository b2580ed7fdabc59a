//! Export formats built from a resolved shape.
//!
//! Every exporter works on the same two outlines: the border path (outer
//! outline of the whole shape) and the fill path (inset by the border width).
//! Documents are sized `(width + 2b) x (height + 2b)`.
//!
//! # Example
//!
//! ```
//! use corner_shaper::{ShapeColors, ShapeParams, export};
//!
//! let params = ShapeParams::default();
//! let svg = export::svg_document(&params, &ShapeColors::default());
//! assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\""));
//!
//! let size = export::validate_svg(&svg).unwrap();
//! assert_eq!(size, (100.0, 100.0));
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use resvg::usvg::{Options, Tree};

use crate::editor::{ShapeColors, hex};
use crate::error::ShapeError;
use crate::geometry::ShapeParams;
use crate::numeric::Num;

/// Characters a CSS `url()` data URL cannot carry raw.
const DATA_URL: &AsciiSet = &CONTROLS.add(b'%').add(b'#').add(b'<').add(b'>');

/// Suggested file name for [`svg_file`] downloads.
pub const SVG_FILE_NAME: &str = "corner-shape.svg";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// ============================================================================
// SVG
// ============================================================================

fn svg_open(params: &ShapeParams) -> String {
    let (width, height) = params.outer_size();
    format!(
        r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = Num(width),
        h = Num(height)
    )
}

/// A standalone SVG document.
///
/// With a border, the border path is painted in the border color and the fill
/// path is painted over it in the background color, leaving a ring of exactly
/// the border width. Without one, only the fill path is drawn.
pub fn svg_document(params: &ShapeParams, colors: &ShapeColors) -> String {
    let mut svg = svg_open(params);
    if params.border_width > 0.0 {
        svg.push_str(&format!(
            r##"<path d="{}" fill="#{}" />"##,
            params.border_path(),
            hex(colors.border)
        ));
    }
    svg.push_str(&format!(
        r##"<path d="{}" fill="#{}" />"##,
        params.fill_path(),
        hex(colors.background)
    ));
    svg.push_str("</svg>");
    svg
}

/// [`svg_document`] with an XML prolog, ready to be written to disk.
pub fn svg_file(params: &ShapeParams, colors: &ShapeColors) -> String {
    format!("{XML_PROLOG}\n{}", svg_document(params, colors))
}

/// A single-path black silhouette of the whole shape, border included.
pub fn mask_svg(params: &ShapeParams) -> String {
    format!(
        r#"{}<path d="{}" fill="black" /></svg>"#,
        svg_open(params),
        params.border_path()
    )
}

// ============================================================================
// CSS
// ============================================================================

/// Embeds an SVG document in a `data:` URL usable inside CSS `url("...")`.
///
/// Only the characters that break a URL or the surrounding quotes are
/// escaped; double quotes become single quotes.
pub fn svg_data_url(svg: &str) -> String {
    let svg = svg.replace('"', "'").replace(['\n', '\r'], "");
    format!("data:image/svg+xml,{}", utf8_percent_encode(&svg, DATA_URL))
}

fn css_size(params: &ShapeParams) -> String {
    let (width, height) = params.outer_size();
    format!("width: {}px;\nheight: {}px;\n", Num(width), Num(height))
}

/// A CSS block that cuts an element to the shape with `mask`.
pub fn css_mask(params: &ShapeParams) -> String {
    let url = svg_data_url(&mask_svg(params));
    format!(
        "{}-webkit-mask: url(\"{url}\") no-repeat center / 100% 100%;\nmask: url(\"{url}\") no-repeat center / 100% 100%;",
        css_size(params)
    )
}

/// A CSS block that cuts an element to the shape with `clip-path`.
pub fn css_clip_path(params: &ShapeParams) -> String {
    format!(
        "{}clip-path: path(\"{}\");",
        css_size(params),
        params.border_path()
    )
}

// ============================================================================
// Validation
// ============================================================================

/// Parses an exported document with usvg and returns its size.
pub fn validate_svg(svg: &str) -> Result<(f32, f32), ShapeError> {
    let tree = Tree::from_str(svg, &Options::default())
        .map_err(|e| ShapeError::InvalidSvg(e.to_string()))?;
    let size = tree.size();
    Ok((size.width(), size.height()))
}
