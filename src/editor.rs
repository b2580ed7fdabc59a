//! Interactive editing session around the shape engine.

use palette::Srgb;
use tracing::{debug, warn};

use crate::constraint::{
    InvertedCornerUpdate, resolve_border_width, resolve_inverted_corner, resolve_inverted_corners,
    resolve_params, resolve_radius, toggle_inverted,
};
use crate::drag::{DragState, PointerPosition};
use crate::error::ShapeError;
use crate::export;
use crate::geometry::{Canvas, Corner, CornerRadius, InvertedCorner, Orientation, ShapeParams};
use crate::numeric::{AspectRatio, canonicalize};
use crate::path::Path;
use crate::profile::{ColorSettings, ShapeProfile};
use crate::share::ShareQuery;

// ============================================================================
// Colors
// ============================================================================

/// Paint colors for exported documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeColors {
    /// Ring drawn between the border path and the fill path.
    pub border: Srgb<u8>,
    /// The fill region.
    pub background: Srgb<u8>,
}

impl Default for ShapeColors {
    fn default() -> Self {
        Self {
            border: Srgb::new(0xFF, 0x20, 0x56),
            background: Srgb::new(0x51, 0x3D, 0x34),
        }
    }
}

/// Parses `RRGGBB` or `RGB`, with or without a leading `#`.
pub fn parse_color(text: &str) -> Result<Srgb<u8>, ShapeError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !matches!(digits.len(), 3 | 6) {
        return Err(ShapeError::InvalidColor(text.to_string()));
    }
    digits
        .parse::<Srgb<u8>>()
        .map_err(|_| ShapeError::InvalidColor(text.to_string()))
}

/// Uppercase `RRGGBB`, no `#`.
pub fn hex(color: Srgb<u8>) -> String {
    format!("{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

// ============================================================================
// Configurable Trait
// ============================================================================

/// Types that can be configured from a [`ShapeProfile`].
pub trait Configurable {
    /// Replaces the current settings with the profile's. Shape values are
    /// resolved on the way in.
    fn apply_profile(&mut self, profile: &ShapeProfile) -> Result<(), ShapeError>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> ShapeProfile;
}

// ============================================================================
// ShapeEditor
// ============================================================================

/// One editing session: the current shape, its colors and the drag in
/// progress.
///
/// Every setter routes its input through the constraint resolver, so
/// [`params`](Self::params) is always a resolved set and the path generators
/// never see unclamped values.
///
/// # Example
///
/// ```
/// use corner_shaper::{Corner, InvertedCornerUpdate, ShapeEditor};
///
/// let mut editor = ShapeEditor::new();
/// editor.set_canvas(200.0, 100.0).unwrap();
/// editor.set_radius(Corner::TopLeft, 500.0);
/// assert_eq!(editor.params().corner_radius.tl, 50.0);
///
/// editor.update_inverted_corner(Corner::TopRight, InvertedCornerUpdate::width(1000.0));
/// assert!(editor.params().inverted_corners.tr.width < 200.0);
///
/// assert!(editor.fill_path().to_string().starts_with('M'));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEditor {
    params: ShapeParams,
    colors: ShapeColors,
    drag: DragState,
}

impl Default for ShapeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeEditor {
    /// Starts from the built-in starter shape.
    pub fn new() -> Self {
        Self::with_params(ShapeParams::default(), ShapeColors::default())
    }

    /// Starts from arbitrary parameters, resolving them first.
    pub fn with_params(params: ShapeParams, colors: ShapeColors) -> Self {
        Self {
            params: resolve_params(&params),
            colors,
            drag: DragState::Idle,
        }
    }

    /// Starts from a share-URL query string or full URL.
    pub fn from_share_query(query: &str) -> Self {
        let shared = ShareQuery::decode(query);
        Self::with_params(shared.params, shared.colors)
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    pub fn colors(&self) -> &ShapeColors {
        &self.colors
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    // ------------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------------

    /// Resizes the canvas and re-resolves radii and notches against it.
    pub fn set_canvas(&mut self, width: f64, height: f64) -> Result<(), ShapeError> {
        let canvas = Canvas::new(canonicalize(width), canonicalize(height))?;
        debug!(width = canvas.width, height = canvas.height, "canvas resized");
        self.params = resolve_params(&ShapeParams {
            canvas,
            ..self.params
        });
        Ok(())
    }

    /// Sets one corner's radius.
    ///
    /// Notches are re-resolved afterwards, since a plain corner's radius is
    /// what bounds the notches next to it.
    pub fn set_radius(&mut self, corner: Corner, value: f64) {
        let radius = resolve_radius(&self.params.canvas, value);
        debug!(corner = corner.key(), requested = value, radius, "radius set");
        self.apply_radii(self.params.corner_radius.with(corner, radius));
    }

    /// Sets all four radii at once.
    pub fn set_all_radii(&mut self, value: f64) {
        let radius = resolve_radius(&self.params.canvas, value);
        debug!(requested = value, radius, "uniform radius set");
        self.apply_radii(CornerRadius::all(radius));
    }

    fn apply_radii(&mut self, corner_radius: CornerRadius) {
        let inverted_corners = resolve_inverted_corners(
            &self.params.canvas,
            &self.params.inverted_corners,
            &corner_radius,
        );
        self.params = ShapeParams {
            corner_radius,
            inverted_corners,
            ..self.params
        };
    }

    /// The shared radius when all four corners agree.
    pub fn uniform_radius(&self) -> Option<f64> {
        self.params.corner_radius.uniform()
    }

    /// Applies a partial edit to one notch and returns the resolved result.
    pub fn update_inverted_corner(
        &mut self,
        corner: Corner,
        update: InvertedCornerUpdate,
    ) -> InvertedCorner {
        let resolved = resolve_inverted_corner(
            &self.params.canvas,
            &self.params.inverted_corners,
            &self.params.corner_radius,
            corner,
            update,
        );
        self.apply_inverted_corner(corner, resolved)
    }

    /// Switches a corner between plain and notched.
    pub fn toggle_inverted(&mut self, corner: Corner) -> InvertedCorner {
        let resolved = toggle_inverted(
            &self.params.canvas,
            &self.params.inverted_corners,
            &self.params.corner_radius,
            corner,
        );
        debug!(corner = corner.key(), inverted = resolved.inverted, "notch toggled");
        self.apply_inverted_corner(corner, resolved)
    }

    /// Stores one edited descriptor and re-resolves the rest around it. A
    /// notch turning back into a plain corner hands its side over to its
    /// radius, which may leave the neighboring notches too wide.
    fn apply_inverted_corner(
        &mut self,
        corner: Corner,
        resolved: InvertedCorner,
    ) -> InvertedCorner {
        let corners = self.params.inverted_corners.with(corner, resolved);
        self.params.inverted_corners =
            resolve_inverted_corners(&self.params.canvas, &corners, &self.params.corner_radius);
        self.params.inverted_corners[corner]
    }

    pub fn set_border_width(&mut self, value: f64) {
        self.params.border_width = resolve_border_width(value);
    }

    pub fn set_colors(&mut self, colors: ShapeColors) {
        self.colors = colors;
    }

    // ------------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------------

    /// Where the drag handle for `corner` sits on the canvas.
    pub fn handle_position(&self, corner: Corner) -> (f64, f64) {
        corner.handle_position(&self.params.canvas, self.params.corner_radius[corner])
    }

    /// The handle within `tolerance` of `at`, if any.
    ///
    /// Handles of notched corners are not shown, so they cannot be hit.
    pub fn handle_at(&self, at: PointerPosition, tolerance: f64) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .filter(|&corner| !self.params.inverted_corners[corner].inverted)
            .find(|&corner| {
                let (x, y) = self.handle_position(corner);
                (x - at.x).hypot(y - at.y) <= tolerance
            })
    }

    pub fn press_handle(&mut self, corner: Corner, at: PointerPosition) {
        self.drag = self.drag.press(corner, at);
    }

    /// Feeds a pointer move. While a handle is held this adjusts its radius.
    pub fn move_pointer(&mut self, at: PointerPosition) {
        let (drag, nudge) = self.drag.move_to(at);
        self.drag = drag;
        if let Some(nudge) = nudge {
            let current = self.params.corner_radius[nudge.corner];
            self.set_radius(nudge.corner, current + nudge.delta);
        }
    }

    pub fn release_pointer(&mut self) {
        self.drag = self.drag.release();
    }

    // ------------------------------------------------------------------------
    // Derived values and exports
    // ------------------------------------------------------------------------

    pub fn fill_path(&self) -> Path {
        self.params.fill_path()
    }

    pub fn border_path(&self) -> Path {
        self.params.border_path()
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::of(&self.params.canvas)
    }

    pub fn orientation(&self) -> Orientation {
        self.params.canvas.orientation()
    }

    pub fn share_query(&self) -> String {
        ShareQuery::encode(&self.params, &self.colors)
    }

    pub fn svg_document(&self) -> String {
        export::svg_document(&self.params, &self.colors)
    }

    pub fn svg_file(&self) -> String {
        export::svg_file(&self.params, &self.colors)
    }

    pub fn css_mask(&self) -> String {
        export::css_mask(&self.params)
    }

    pub fn css_clip_path(&self) -> String {
        export::css_clip_path(&self.params)
    }
}

impl Configurable for ShapeEditor {
    /// Applies a profile. Colors are parsed before anything changes, so an
    /// invalid color leaves the editor untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use corner_shaper::{Configurable, ShapeEditor, ShapeProfile};
    ///
    /// let json = r##"{
    ///     "shape": {
    ///         "canvas": { "width": 80, "height": 40 },
    ///         "cornerRadius": { "tl": 99, "tr": 0, "br": 0, "bl": 0 },
    ///         "invertedCorners": {
    ///             "tl": { "width": 0, "height": 0, "roundness": 0, "inverted": false },
    ///             "tr": { "width": 0, "height": 0, "roundness": 0, "inverted": false },
    ///             "br": { "width": 0, "height": 0, "roundness": 0, "inverted": false },
    ///             "bl": { "width": 0, "height": 0, "roundness": 0, "inverted": false }
    ///         }
    ///     },
    ///     "colors": { "border": "#000000", "background": "#FFFFFF" }
    /// }"##;
    ///
    /// let mut editor = ShapeEditor::new();
    /// editor.apply_profile(&ShapeProfile::from_json(json).unwrap()).unwrap();
    /// assert_eq!(editor.params().corner_radius.tl, 20.0);
    /// ```
    fn apply_profile(&mut self, profile: &ShapeProfile) -> Result<(), ShapeError> {
        let colors = ShapeColors::try_from(&profile.colors)?;
        let params = resolve_params(&profile.shape);
        if params != profile.shape {
            warn!("profile values were out of range and have been clamped");
        }
        self.params = params;
        self.colors = colors;
        self.drag = DragState::Idle;
        Ok(())
    }

    fn export_profile(&self) -> ShapeProfile {
        ShapeProfile {
            shape: self.params,
            colors: ColorSettings::from(&self.colors),
        }
    }
}
