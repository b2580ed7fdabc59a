//! Outline construction.
//!
//! The outline is walked clockwise starting on the top edge, right after the
//! top-left corner. Each corner contributes a straight run along the edge
//! that arrives at it, followed by either one convex arc or the five-segment
//! notch sequence. All four corners go through the same procedure; a corner
//! only differs in its position and the directions of its two edges (see
//! [`Corner::incoming`] and [`Corner::outgoing`]).
//!
//! Positions are written as `C + incoming * a + outgoing * b` where `C` is the
//! corner point. For a notch of extents `(along_in, along_out)`:
//!
//! ```text
//!   edge end      C - in * (along_in + outer)
//!   arc (outer)   C - in * along_in          + out * outer
//!   wall          C - in * along_in          + out * (along_out - inner)
//!   arc (inner)   C - in * (along_in - inner) + out * along_out
//!   floor         C - in * outer             + out * along_out
//!   arc (outer)   C                          + out * (along_out + outer)
//! ```

use crate::geometry::{Canvas, Corner, CornerRadius, InvertedCorners, Offset, ShapeParams};

use super::{Path, PathCommand, Sweep};

/// How a single corner is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CornerShape {
    Round {
        radius: f64,
    },
    /// `outer` rounds the two turns into and out of the notch, `inner`
    /// rounds the notch's own inside corner.
    Notch {
        width: f64,
        height: f64,
        outer: f64,
        inner: f64,
    },
}

impl CornerShape {
    fn fill(corner: Corner, radii: &CornerRadius, corners: &InvertedCorners) -> Self {
        Self::grown(corner, radii, corners, 0.0)
    }

    /// The shape of the same corner on an outline pushed outwards by
    /// `amount`: convex arcs widen, the notch's concave arc narrows.
    fn grown(corner: Corner, radii: &CornerRadius, corners: &InvertedCorners, amount: f64) -> Self {
        let notch = corners[corner];
        if notch.inverted {
            CornerShape::Notch {
                width: notch.width,
                height: notch.height,
                outer: notch.roundness + amount,
                // Below zero the offset corner is sharp.
                inner: (notch.roundness - amount).max(0.0),
            }
        } else {
            CornerShape::Round {
                radius: radii[corner] + amount,
            }
        }
    }

    /// Distance from the corner point back along the arriving edge where the
    /// corner starts.
    fn lead_in(self, corner: Corner) -> f64 {
        match self {
            CornerShape::Round { radius } => radius,
            CornerShape::Notch { outer, .. } => self.along(corner).0 + outer,
        }
    }

    /// Distance from the corner point along the leaving edge where the corner
    /// ends.
    fn lead_out(self, corner: Corner) -> f64 {
        match self {
            CornerShape::Round { radius } => radius,
            CornerShape::Notch { outer, .. } => self.along(corner).1 + outer,
        }
    }

    /// Notch extents along the arriving and leaving edges.
    fn along(self, corner: Corner) -> (f64, f64) {
        match self {
            CornerShape::Round { .. } => (0.0, 0.0),
            CornerShape::Notch { width, height, .. } => {
                if corner.arrives_horizontally() {
                    (width, height)
                } else {
                    (height, width)
                }
            }
        }
    }
}

/// Accumulates commands for one outline.
struct Outline {
    canvas: Canvas,
    offset: Offset,
    path: Path,
}

impl Outline {
    fn new(canvas: Canvas, offset: Offset) -> Self {
        Self {
            canvas,
            offset,
            path: Path::with_capacity(2 + 6 * 4),
        }
    }

    /// `C + incoming * a + outgoing * b`, translated by the offset.
    fn at(&self, corner: Corner, a: f64, b: f64) -> (f64, f64) {
        let (cx, cy) = corner.point(&self.canvas);
        let (ix, iy) = corner.incoming();
        let (ox, oy) = corner.outgoing();
        (
            cx + ix * a + ox * b + self.offset.x,
            cy + iy * a + oy * b + self.offset.y,
        )
    }

    fn move_to(&mut self, (x, y): (f64, f64)) {
        self.path.push(PathCommand::MoveTo { x, y });
    }

    /// Straight run to `to`, along the arriving edge (`along_incoming`) or the
    /// leaving edge of `corner`.
    fn line(&mut self, corner: Corner, along_incoming: bool, (x, y): (f64, f64)) {
        let horizontal = corner.arrives_horizontally() == along_incoming;
        self.path.push(if horizontal {
            PathCommand::Horizontal { x }
        } else {
            PathCommand::Vertical { y }
        });
    }

    fn arc(&mut self, radius: f64, sweep: Sweep, (x, y): (f64, f64)) {
        self.path.push(PathCommand::Arc { radius, sweep, x, y });
    }

    /// The edge arriving at `corner` followed by the corner itself.
    fn corner(&mut self, corner: Corner, shape: CornerShape) {
        let edge_end = self.at(corner, -shape.lead_in(corner), 0.0);
        self.line(corner, true, edge_end);

        match shape {
            CornerShape::Round { radius } => {
                let end = self.at(corner, 0.0, radius);
                self.arc(radius, Sweep::Clockwise, end);
            }
            CornerShape::Notch { outer, inner, .. } => {
                let (along_in, along_out) = shape.along(corner);

                let p = self.at(corner, -along_in, outer);
                self.arc(outer, Sweep::Clockwise, p);

                let p = self.at(corner, -along_in, along_out - inner);
                self.line(corner, false, p);

                let p = self.at(corner, -(along_in - inner), along_out);
                self.arc(inner, Sweep::CounterClockwise, p);

                let p = self.at(corner, -outer, along_out);
                self.line(corner, true, p);

                let p = self.at(corner, 0.0, along_out + outer);
                self.arc(outer, Sweep::Clockwise, p);
            }
        }
    }

    fn finish(mut self) -> Path {
        self.path.push(PathCommand::Close);
        self.path
    }
}

/// Walks the four corners clockwise, starting where the top-left corner ends.
fn build(canvas: Canvas, offset: Offset, shapes: [CornerShape; 4]) -> Path {
    let mut outline = Outline::new(canvas, offset);

    let first = Corner::TopLeft;
    let start = outline.at(first, 0.0, shapes[first.index()].lead_out(first));
    outline.move_to(start);

    for corner in [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ] {
        outline.corner(corner, shapes[corner.index()]);
    }

    outline.finish()
}

/// Builds the outline of the shape's fill region.
///
/// `offset` is added to every coordinate; pass `Offset::uniform(border)` to
/// nest the fill inside the matching [`generate_border_path`].
pub fn generate_fill_path(
    canvas: &Canvas,
    radii: &CornerRadius,
    corners: &InvertedCorners,
    offset: Offset,
) -> Path {
    let shapes = Corner::ALL.map(|corner| CornerShape::fill(corner, radii, corners));
    build(*canvas, offset, shapes)
}

/// Builds the outer outline of a border of width `border_width` drawn around
/// the fill region.
///
/// The canvas grows by `border_width` on each side. Plain radii and the
/// notch's outward turns grow by the same amount while the notch's inward
/// turn shrinks, so the ring keeps a constant thickness around both.
pub fn generate_border_path(
    canvas: &Canvas,
    radii: &CornerRadius,
    corners: &InvertedCorners,
    border_width: f64,
) -> Path {
    let shapes =
        Corner::ALL.map(|corner| CornerShape::grown(corner, radii, corners, border_width));
    build(canvas.expanded(border_width), Offset::ZERO, shapes)
}

impl ShapeParams {
    /// The fill outline, inset by the border width.
    pub fn fill_path(&self) -> Path {
        generate_fill_path(
            &self.canvas,
            &self.corner_radius,
            &self.inverted_corners,
            Offset::uniform(self.border_width),
        )
    }

    /// The border's outer outline. Equal to the fill outline when there is no
    /// border.
    pub fn border_path(&self) -> Path {
        generate_border_path(
            &self.canvas,
            &self.corner_radius,
            &self.inverted_corners,
            self.border_width,
        )
    }

    /// Width and height of the area covered by fill and border together.
    pub fn outer_size(&self) -> (f64, f64) {
        let outer = self.canvas.expanded(self.border_width);
        (outer.width, outer.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::resolve_params;
    use crate::geometry::InvertedCorner;
    use std::f64::consts::PI;

    fn square() -> Canvas {
        Canvas::new(100.0, 100.0).unwrap()
    }

    fn plain() -> InvertedCorners {
        InvertedCorners::default()
    }

    #[test]
    fn sharp_square() {
        let path = generate_fill_path(&square(), &CornerRadius::all(0.0), &plain(), Offset::ZERO);
        assert_eq!(
            path.to_string(),
            "M0,0H100A0,0 0,0,1 100,0V100A0,0 0,0,1 100,100H0A0,0 0,0,1 0,100V0A0,0 0,0,1 0,0Z"
        );
    }

    #[test]
    fn rounded_square() {
        let path = generate_fill_path(&square(), &CornerRadius::all(20.0), &plain(), Offset::ZERO);
        assert_eq!(
            path.to_string(),
            "M20,0H80A20,20 0,0,1 100,20V80A20,20 0,0,1 80,100H20A20,20 0,0,1 0,80V20A20,20 0,0,1 20,0Z"
        );
        let expected = 4.0 * 60.0 + 4.0 * (PI * 20.0 / 2.0);
        assert!((path.length() - expected).abs() < 1e-9, "length {}", path.length());
    }

    #[test]
    fn top_right_notch() {
        let corners = plain().with(Corner::TopRight, InvertedCorner::new(60.0, 30.0, 10.0, true));
        let path = generate_fill_path(&square(), &CornerRadius::all(0.0), &corners, Offset::ZERO);
        let text = path.to_string();

        // Top edge stops 60 + 10 short of the right side.
        assert!(text.starts_with("M0,0H30"), "{text}");
        assert!(
            text.contains("H30A10,10 0,0,1 40,10V20A10,10 0,0,0 50,30H90A10,10 0,0,1 100,40V100"),
            "{text}"
        );
        assert_eq!(
            path.commands()
                .iter()
                .filter(|c| matches!(c, PathCommand::Arc { sweep: Sweep::CounterClockwise, .. }))
                .count(),
            1
        );
    }

    #[test]
    fn default_shape_text() {
        let params = ShapeParams::default();
        assert_eq!(
            params.fill_path().to_string(),
            "M20,0H30A10,10 0,0,1 40,10V20A10,10 0,0,0 50,30H90A10,10 0,0,1 100,40\
             V90A10,10 0,0,1 90,100\
             H30A10,10 0,0,1 20,90V90A10,10 0,0,0 10,80H10A10,10 0,0,1 0,70\
             V20A20,20 0,0,1 20,0Z"
        );
    }

    #[test]
    fn notch_at_every_corner() {
        let n = InvertedCorner::new(30.0, 20.0, 5.0, true);
        let corners = InvertedCorners::new(n, n, n, n);
        let path = generate_fill_path(&square(), &CornerRadius::all(0.0), &corners, Offset::ZERO);
        assert_eq!(
            path.to_string(),
            "M35,0\
             H65A5,5 0,0,1 70,5V15A5,5 0,0,0 75,20H95A5,5 0,0,1 100,25\
             V75A5,5 0,0,1 95,80H75A5,5 0,0,0 70,85V95A5,5 0,0,1 65,100\
             H35A5,5 0,0,1 30,95V85A5,5 0,0,0 25,80H5A5,5 0,0,1 0,75\
             V25A5,5 0,0,1 5,20H25A5,5 0,0,0 30,15V5A5,5 0,0,1 35,0Z"
        );
    }

    #[test]
    fn border_path_for_default_shape() {
        let params = ShapeParams {
            border_width: 5.0,
            ..ShapeParams::default()
        };
        assert_eq!(
            params.border_path().to_string(),
            "M25,0H35A15,15 0,0,1 50,15V25A5,5 0,0,0 55,30H95A15,15 0,0,1 110,45\
             V95A15,15 0,0,1 95,110\
             H35A15,15 0,0,1 20,95V95A5,5 0,0,0 15,90H15A15,15 0,0,1 0,75\
             V25A25,25 0,0,1 25,0Z"
        );
        assert_eq!(
            params.fill_path().to_string(),
            "M25,5H35A10,10 0,0,1 45,15V25A10,10 0,0,0 55,35H95A10,10 0,0,1 105,45\
             V95A10,10 0,0,1 95,105\
             H35A10,10 0,0,1 25,95V95A10,10 0,0,0 15,85H15A10,10 0,0,1 5,75\
             V25A20,20 0,0,1 25,5Z"
        );
        assert_eq!(params.outer_size(), (110.0, 110.0));
    }

    #[test]
    fn zero_border_matches_fill() {
        let params = ShapeParams::default();
        assert_eq!(params.border_path(), params.fill_path());
    }

    #[test]
    fn border_wider_than_notch_roundness_gives_sharp_inner_corner() {
        let corners = plain().with(Corner::TopRight, InvertedCorner::new(40.0, 20.0, 2.0, true));
        let path = generate_border_path(&square(), &CornerRadius::all(0.0), &corners, 6.0);
        assert!(
            path.to_string().contains("V20A0,0 0,0,0 72,20H104"),
            "{path}"
        );
    }

    #[test]
    fn paths_close_on_their_start() {
        let canvas = Canvas::new(160.0, 90.0).unwrap();
        for mask in 0u8..16 {
            let mut corners = InvertedCorners::default();
            for corner in Corner::ALL {
                let inverted = mask & (1 << corner.index()) != 0;
                corners[corner] = InvertedCorner::new(35.0, 25.0, 7.5, inverted);
            }
            let params = resolve_params(&ShapeParams::new(
                canvas,
                CornerRadius::new(12.0, 0.0, 45.0, 3.3),
                corners,
                4.0,
            ));
            for path in [params.fill_path(), params.border_path()] {
                assert_eq!(path.commands().last(), Some(&PathCommand::Close));
                let start = path.start_point().unwrap();
                let end = path.end_point().unwrap();
                assert!(
                    (start.0 - end.0).abs() < 1e-9 && (start.1 - end.1).abs() < 1e-9,
                    "mask {mask}: {start:?} != {end:?}"
                );
            }
        }
    }

    #[test]
    fn border_thickness_is_constant_on_straight_edges() {
        let canvas = Canvas::new(140.0, 100.0).unwrap();
        for border in [0.0, 1.5, 4.0, 12.0] {
            for mask in 0u8..16 {
                let mut corners = InvertedCorners::default();
                for corner in Corner::ALL {
                    let inverted = mask & (1 << corner.index()) != 0;
                    corners[corner] = InvertedCorner::new(40.0, 30.0, 6.0, inverted);
                }
                let params = resolve_params(&ShapeParams::new(
                    canvas,
                    CornerRadius::new(10.0, 25.0, 0.0, 8.0),
                    corners,
                    border,
                ));
                let fill = params.fill_path();
                let outer = params.border_path();
                assert_eq!(fill.len(), outer.len());

                let fill_points = fill.points();
                let outer_points = outer.points();
                for (i, command) in fill.commands().iter().enumerate() {
                    let (f_from, f_to) = fill_points[i];
                    let (o_from, o_to) = outer_points[i];
                    let gap = match command {
                        PathCommand::Horizontal { .. } => {
                            ((f_from.1 + f_to.1) / 2.0 - (o_from.1 + o_to.1) / 2.0).abs()
                        }
                        PathCommand::Vertical { .. } => {
                            ((f_from.0 + f_to.0) / 2.0 - (o_from.0 + o_to.0) / 2.0).abs()
                        }
                        _ => continue,
                    };
                    assert!(
                        (gap - border).abs() < 1e-9,
                        "border {border} mask {mask}: gap {gap} at {command:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let params = ShapeParams::default();
        assert_eq!(params.fill_path().to_string(), params.fill_path().to_string());
        assert_eq!(params.border_path().to_string(), params.border_path().to_string());
    }
}
