//! Value types describing a shape: canvas, corners, radii and notches.
//!
//! Everything here is `Copy`. Edits never mutate a shared value; the
//! resolver and the editor always hand back a fresh one.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// The drawing area `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Creates a canvas, rejecting non-finite or non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ShapeError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Half of the shortest side, the largest radius any corner may take.
    pub fn max_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// The canvas grown by `amount` on every side.
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    /// Returns whether the canvas is square, landscape or portrait.
    pub fn orientation(&self) -> Orientation {
        if self.width == self.height {
            Orientation::Square
        } else if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Canvas orientation, used for the dimension label next to the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Square,
    Landscape,
    Portrait,
}

/// A translation added to every path coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same offset on both axes.
    pub fn uniform(amount: f64) -> Self {
        Self::new(amount, amount)
    }
}

/// One of the four corners, in clockwise order starting at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in clockwise order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Position in [`Corner::ALL`], also the drag-handle index.
    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short key used in share URLs and form field names.
    pub fn key(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomRight => "br",
            Corner::BottomLeft => "bl",
        }
    }

    /// The corner sharing this corner's horizontal (top or bottom) side.
    pub fn horizontal_neighbor(self) -> Self {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::BottomRight,
        }
    }

    /// The corner sharing this corner's vertical (left or right) side.
    pub fn vertical_neighbor(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomRight => Corner::TopRight,
            Corner::BottomLeft => Corner::TopLeft,
        }
    }

    /// The corner's position on a `width x height` canvas.
    pub fn point(self, canvas: &Canvas) -> (f64, f64) {
        match self {
            Corner::TopLeft => (0.0, 0.0),
            Corner::TopRight => (canvas.width, 0.0),
            Corner::BottomRight => (canvas.width, canvas.height),
            Corner::BottomLeft => (0.0, canvas.height),
        }
    }

    /// Unit direction of travel along the edge arriving at this corner
    /// during a clockwise walk.
    pub fn incoming(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (0.0, -1.0),
            Corner::TopRight => (1.0, 0.0),
            Corner::BottomRight => (0.0, 1.0),
            Corner::BottomLeft => (-1.0, 0.0),
        }
    }

    /// Unit direction of travel along the edge leaving this corner.
    pub fn outgoing(self) -> (f64, f64) {
        let (x, y) = self.incoming();
        // Clockwise in screen coordinates (y down) turns (x, y) into (-y, x).
        (-y, x)
    }

    /// Whether the edge arriving at this corner is horizontal.
    pub fn arrives_horizontally(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomLeft)
    }

    /// Sign applied to the pointer delta `(dx, dy)` when dragging this
    /// corner's radius handle towards the center.
    pub fn drag_signs(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (1.0, 1.0),
            Corner::TopRight => (-1.0, 1.0),
            Corner::BottomRight => (-1.0, -1.0),
            Corner::BottomLeft => (1.0, -1.0),
        }
    }

    /// Center of the radius handle: the corner moved inwards by `radius` on
    /// both axes.
    pub fn handle_position(self, canvas: &Canvas, radius: f64) -> (f64, f64) {
        let (cx, cy) = self.point(canvas);
        let (sx, sy) = self.drag_signs();
        (cx + sx * radius, cy + sy * radius)
    }
}

/// Per-corner convex radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CornerRadius {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadius {
    pub const fn new(tl: f64, tr: f64, br: f64, bl: f64) -> Self {
        Self { tl, tr, br, bl }
    }

    /// The same radius on all corners.
    pub const fn all(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Returns a copy with one corner replaced.
    pub fn with(mut self, corner: Corner, radius: f64) -> Self {
        self[corner] = radius;
        self
    }

    /// The shared radius when all four corners agree.
    pub fn uniform(&self) -> Option<f64> {
        (self.tl == self.tr && self.tr == self.br && self.br == self.bl).then_some(self.tl)
    }
}

impl Index<Corner> for CornerRadius {
    type Output = f64;

    fn index(&self, corner: Corner) -> &f64 {
        match corner {
            Corner::TopLeft => &self.tl,
            Corner::TopRight => &self.tr,
            Corner::BottomRight => &self.br,
            Corner::BottomLeft => &self.bl,
        }
    }
}

impl IndexMut<Corner> for CornerRadius {
    fn index_mut(&mut self, corner: Corner) -> &mut f64 {
        match corner {
            Corner::TopLeft => &mut self.tl,
            Corner::TopRight => &mut self.tr,
            Corner::BottomRight => &mut self.br,
            Corner::BottomLeft => &mut self.bl,
        }
    }
}

/// A notch descriptor for one corner.
///
/// When `inverted` is false the descriptor is kept but unused and the corner
/// is drawn with its plain radius. When true the corner is cut out by a
/// `width x height` rectangle whose turns are rounded by `roundness`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct InvertedCorner {
    pub width: f64,
    pub height: f64,
    pub roundness: f64,
    pub inverted: bool,
}

impl InvertedCorner {
    pub const fn new(width: f64, height: f64, roundness: f64, inverted: bool) -> Self {
        Self {
            width,
            height,
            roundness,
            inverted,
        }
    }

    /// Extent of the notch along the horizontal or vertical axis.
    pub fn extent(&self, horizontal: bool) -> f64 {
        if horizontal { self.width } else { self.height }
    }
}

/// Notch descriptors for all four corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct InvertedCorners {
    pub tl: InvertedCorner,
    pub tr: InvertedCorner,
    pub br: InvertedCorner,
    pub bl: InvertedCorner,
}

impl InvertedCorners {
    pub const fn new(
        tl: InvertedCorner,
        tr: InvertedCorner,
        br: InvertedCorner,
        bl: InvertedCorner,
    ) -> Self {
        Self { tl, tr, br, bl }
    }

    /// Returns a copy with one corner replaced.
    pub fn with(mut self, corner: Corner, value: InvertedCorner) -> Self {
        self[corner] = value;
        self
    }
}

impl Index<Corner> for InvertedCorners {
    type Output = InvertedCorner;

    fn index(&self, corner: Corner) -> &InvertedCorner {
        match corner {
            Corner::TopLeft => &self.tl,
            Corner::TopRight => &self.tr,
            Corner::BottomRight => &self.br,
            Corner::BottomLeft => &self.bl,
        }
    }
}

impl IndexMut<Corner> for InvertedCorners {
    fn index_mut(&mut self, corner: Corner) -> &mut InvertedCorner {
        match corner {
            Corner::TopLeft => &mut self.tl,
            Corner::TopRight => &mut self.tr,
            Corner::BottomRight => &mut self.br,
            Corner::BottomLeft => &mut self.bl,
        }
    }
}

/// Everything needed to draw a shape.
///
/// A value only counts as *resolved* once it has been passed through
/// [`resolve_params`](crate::resolve_params) or built from resolver output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ShapeParams {
    pub canvas: Canvas,
    pub corner_radius: CornerRadius,
    pub inverted_corners: InvertedCorners,
    #[serde(default)]
    pub border_width: f64,
}

impl ShapeParams {
    pub fn new(
        canvas: Canvas,
        corner_radius: CornerRadius,
        inverted_corners: InvertedCorners,
        border_width: f64,
    ) -> Self {
        Self {
            canvas,
            corner_radius,
            inverted_corners,
            border_width,
        }
    }
}

impl Default for ShapeParams {
    /// The starter shape: a 100x100 canvas with notches at the top right and
    /// bottom left.
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            corner_radius: CornerRadius::new(20.0, 0.0, 10.0, 10.0),
            inverted_corners: InvertedCorners::new(
                InvertedCorner::new(20.0, 30.0, 10.0, false),
                InvertedCorner::new(60.0, 30.0, 10.0, true),
                InvertedCorner::new(30.0, 20.0, 10.0, false),
                InvertedCorner::new(20.0, 20.0, 10.0, true),
            ),
            border_width: 0.0,
        }
    }
}
