//! corner-shaper: rectangles with rounded or notched corners
//!
//! This crate turns a handful of numbers (canvas size, four corner radii,
//! four notch descriptors and a border width) into SVG path data. It has two
//! halves:
//!
//! - the constraint resolver ([`resolve_params`] and friends) clamps edits so
//!   radii fit the canvas and notches never collide with their neighbors;
//! - the path generator ([`generate_fill_path`], [`generate_border_path`])
//!   walks the resolved outline clockwise and emits path commands.
//!
//! # Example
//!
//! ```
//! use corner_shaper::{ShapeParams, resolve_params};
//!
//! let params = resolve_params(&ShapeParams::default());
//! assert_eq!(
//!     params.fill_path().to_string(),
//!     "M20,0H30A10,10 0,0,1 40,10V20A10,10 0,0,0 50,30H90A10,10 0,0,1 100,40\
//!      V90A10,10 0,0,1 90,100H30A10,10 0,0,1 20,90V90A10,10 0,0,0 10,80\
//!      H10A10,10 0,0,1 0,70V20A20,20 0,0,1 20,0Z"
//! );
//! ```
//!
//! # Editing
//!
//! [`ShapeEditor`] keeps a resolved shape across edits, drives radius
//! dragging and produces every export format:
//!
//! ```
//! use corner_shaper::{Corner, PointerPosition, ShapeEditor};
//!
//! let mut editor = ShapeEditor::new();
//! editor.set_border_width(4.0);
//!
//! // Drag the bottom-right handle 20 units toward the center.
//! let start = PointerPosition::new(90.0, 90.0);
//! editor.press_handle(Corner::BottomRight, start);
//! editor.move_pointer(PointerPosition::new(80.0, 80.0));
//! editor.release_pointer();
//! assert_eq!(editor.params().corner_radius.br, 12.0);
//!
//! let link = editor.share_query();
//! let restored = ShapeEditor::from_share_query(&link);
//! assert_eq!(restored.svg_document(), editor.svg_document());
//! ```
//!
//! # Serializable Profiles
//!
//! For files and other processes, use [`ShapeProfile`] with the
//! [`Configurable`] trait:
//!
//! ```
//! use corner_shaper::{Configurable, ShapeEditor, ShapeProfile};
//!
//! let editor = ShapeEditor::new();
//! let json = editor.export_profile().to_json().unwrap();
//!
//! let mut other = ShapeEditor::new();
//! other.apply_profile(&ShapeProfile::from_json(&json).unwrap()).unwrap();
//! assert_eq!(other, editor);
//! ```

mod constraint;
mod drag;
mod editor;
mod error;
mod geometry;
mod numeric;
mod profile;
mod share;

pub mod export;
pub mod path;

pub use constraint::{
    InvertedCornerUpdate, max_notch_height, max_notch_width, resolve_border_width,
    resolve_inverted_corner, resolve_inverted_corners, resolve_params, resolve_radii,
    resolve_radius, toggle_inverted,
};
pub use drag::{DRAG_SENSITIVITY, DragState, PointerPosition, RadiusNudge};
pub use editor::{Configurable, ShapeColors, ShapeEditor, hex, parse_color};
pub use error::{ShapeError, parse_number};
pub use geometry::{
    Canvas, Corner, CornerRadius, InvertedCorner, InvertedCorners, Offset, Orientation,
    ShapeParams,
};
pub use numeric::{AspectRatio, canonicalize, greatest_common_divisor};
pub use path::{Path, PathCommand, Sweep, generate_border_path, generate_fill_path};
pub use profile::{ColorSettings, ShapeProfile};
pub use share::ShareQuery;
