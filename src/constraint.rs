//! Constraint resolver.
//!
//! Keeps the shape parameters mutually consistent while they are edited:
//! radii never exceed half the shortest side, and a notch never grows into
//! the space claimed by the corner next to it. Nothing here fails; values
//! outside the allowed range are clamped.

use tracing::debug;

use crate::geometry::{Canvas, Corner, CornerRadius, InvertedCorner, InvertedCorners, ShapeParams};
use crate::numeric::canonicalize;

/// Clamps a proposed radius into `[0, min(width, height) / 2]`.
pub fn resolve_radius(canvas: &Canvas, value: f64) -> f64 {
    clamp_canonical(value, canvas.max_radius())
}

/// Clamps into `[0, max]` and canonicalizes. Rounding may not push the value
/// back past `max`. A negative `max` yields 0.
fn clamp_canonical(value: f64, max: f64) -> f64 {
    let upper = max.max(0.0);
    canonicalize(value.min(upper).max(0.0)).min(upper)
}

/// Clamps every corner of a radius set.
pub fn resolve_radii(canvas: &Canvas, radii: &CornerRadius) -> CornerRadius {
    CornerRadius::new(
        resolve_radius(canvas, radii.tl),
        resolve_radius(canvas, radii.tr),
        resolve_radius(canvas, radii.br),
        resolve_radius(canvas, radii.bl),
    )
}

/// A partial edit of one notch descriptor. `None` keeps the current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InvertedCornerUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub roundness: Option<f64>,
    pub inverted: Option<bool>,
}

impl InvertedCornerUpdate {
    /// An update that changes nothing and only re-applies the bounds.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn roundness(roundness: f64) -> Self {
        Self {
            roundness: Some(roundness),
            ..Self::default()
        }
    }

    pub fn inverted(inverted: bool) -> Self {
        Self {
            inverted: Some(inverted),
            ..Self::default()
        }
    }
}

/// Space a corner occupies along one of its sides, measured from its own end
/// of that side.
fn neighbor_span(
    neighbor: &InvertedCorner,
    neighbor_radius: f64,
    horizontal: bool,
) -> f64 {
    if neighbor.inverted {
        neighbor.roundness + neighbor.extent(horizontal)
    } else {
        neighbor_radius
    }
}

/// Largest notch width for `corner` that keeps it clear of its horizontal
/// neighbor.
pub fn max_notch_width(
    canvas: &Canvas,
    corners: &InvertedCorners,
    radii: &CornerRadius,
    corner: Corner,
    roundness: f64,
) -> f64 {
    let neighbor = corner.horizontal_neighbor();
    canvas.width - roundness - neighbor_span(&corners[neighbor], radii[neighbor], true)
}

/// Largest notch height for `corner` that keeps it clear of its vertical
/// neighbor.
pub fn max_notch_height(
    canvas: &Canvas,
    corners: &InvertedCorners,
    radii: &CornerRadius,
    corner: Corner,
    roundness: f64,
) -> f64 {
    let neighbor = corner.vertical_neighbor();
    canvas.height - roundness - neighbor_span(&corners[neighbor], radii[neighbor], false)
}

/// Recomputes the full notch descriptor for one corner after a partial edit.
///
/// Width and height are raised to at least `roundness * 2` and then capped by
/// the span the neighboring corner leaves free. Roundness itself is taken
/// as given.
pub fn resolve_inverted_corner(
    canvas: &Canvas,
    corners: &InvertedCorners,
    radii: &CornerRadius,
    corner: Corner,
    update: InvertedCornerUpdate,
) -> InvertedCorner {
    let current = corners[corner];
    let roundness = canonicalize(update.roundness.unwrap_or(current.roundness).max(0.0));
    let inverted = update.inverted.unwrap_or(current.inverted);

    let max_width = max_notch_width(canvas, corners, radii, corner, roundness);
    let max_height = max_notch_height(canvas, corners, radii, corner, roundness);

    let width = update.width.unwrap_or(current.width).max(roundness * 2.0);
    let height = update.height.unwrap_or(current.height).max(roundness * 2.0);

    let resolved = InvertedCorner {
        width: clamp_canonical(width, max_width),
        height: clamp_canonical(height, max_height),
        roundness,
        inverted,
    };

    if resolved.width != width || resolved.height != height {
        debug!(
            corner = corner.key(),
            requested_width = width,
            requested_height = height,
            width = resolved.width,
            height = resolved.height,
            "notch clamped"
        );
    }

    resolved
}

/// Flips a corner between plain and notched, then pulls its size back inside
/// the bounds for its new role.
pub fn toggle_inverted(
    canvas: &Canvas,
    corners: &InvertedCorners,
    radii: &CornerRadius,
    corner: Corner,
) -> InvertedCorner {
    let flipped = InvertedCorner {
        inverted: !corners[corner].inverted,
        ..corners[corner]
    };
    let corners = corners.with(corner, flipped);
    resolve_inverted_corner(canvas, &corners, radii, corner, InvertedCornerUpdate::none())
}

/// Resolves every notch descriptor, each against the already resolved state
/// of the ones before it.
///
/// Inverted corners go first, in clockwise order. Plain corners only keep
/// their descriptor for later, so they are bounded by the final notches.
pub fn resolve_inverted_corners(
    canvas: &Canvas,
    corners: &InvertedCorners,
    radii: &CornerRadius,
) -> InvertedCorners {
    let (notched, plain): (Vec<Corner>, Vec<Corner>) =
        Corner::ALL.into_iter().partition(|&corner| corners[corner].inverted);
    notched.into_iter().chain(plain).fold(*corners, |acc, corner| {
        let resolved =
            resolve_inverted_corner(canvas, &acc, radii, corner, InvertedCornerUpdate::none());
        acc.with(corner, resolved)
    })
}

/// Clamps a proposed border width to a canonical non-negative value.
pub fn resolve_border_width(value: f64) -> f64 {
    canonicalize(value.max(0.0))
}

/// Projects an arbitrary parameter set onto the valid region.
///
/// Radii are resolved first since notch bounds depend on them.
pub fn resolve_params(params: &ShapeParams) -> ShapeParams {
    let canvas = params.canvas;
    let corner_radius = resolve_radii(&canvas, &params.corner_radius);
    let inverted_corners =
        resolve_inverted_corners(&canvas, &params.inverted_corners, &corner_radius);
    ShapeParams {
        canvas,
        corner_radius,
        inverted_corners,
        border_width: resolve_border_width(params.border_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square() -> Canvas {
        Canvas::new(100.0, 100.0).unwrap()
    }

    fn notch(width: f64, height: f64, roundness: f64, inverted: bool) -> InvertedCorner {
        InvertedCorner::new(width, height, roundness, inverted)
    }

    #[test]
    fn radius_clamps_into_range() {
        let canvas = Canvas::new(100.0, 60.0).unwrap();
        assert_eq!(resolve_radius(&canvas, -5.0), 0.0);
        assert_eq!(resolve_radius(&canvas, 45.0), 30.0);
        assert_eq!(resolve_radius(&canvas, 12.0), 12.0);
        assert_eq!(resolve_radius(&canvas, 12.3456), 12.35);
    }

    #[test]
    fn radius_clamp_holds_for_many_inputs() {
        for (w, h) in [(100.0, 100.0), (40.0, 300.0), (7.5, 3.25), (1000.0, 1.0)] {
            let canvas = Canvas::new(w, h).unwrap();
            let limit = w.min(h) / 2.0;
            for r in [-100.0, 0.0, 0.5, 1.0, 3.3, 50.0, 1e6] {
                let resolved = resolve_radius(&canvas, r);
                assert!((0.0..=limit + EPSILON).contains(&resolved), "{w}x{h} r={r}");
                if (0.0..=limit).contains(&r) {
                    assert_eq!(resolved, canonicalize(r));
                }
            }
        }
    }

    #[test]
    fn width_capped_by_inverted_neighbor() {
        let corners = InvertedCorners::new(
            notch(90.0, 20.0, 10.0, true),
            notch(60.0, 30.0, 10.0, true),
            notch(20.0, 20.0, 5.0, false),
            notch(20.0, 20.0, 5.0, false),
        );
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &CornerRadius::all(0.0),
            Corner::TopLeft,
            InvertedCornerUpdate::none(),
        );
        // 100 - own roundness 10 - neighbor roundness 10 - neighbor width 60
        assert_eq!(resolved.width, 20.0);
        assert_eq!(resolved.height, 20.0);
    }

    #[test]
    fn width_capped_by_plain_neighbor_radius() {
        let corners = InvertedCorners::default().with(Corner::TopRight, notch(200.0, 10.0, 5.0, true));
        let radii = CornerRadius::new(25.0, 0.0, 0.0, 0.0);
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &radii,
            Corner::TopRight,
            InvertedCornerUpdate::none(),
        );
        assert_eq!(resolved.width, 70.0);
    }

    #[test]
    fn height_capped_by_vertical_neighbor() {
        let corners = InvertedCorners::new(
            notch(10.0, 10.0, 0.0, false),
            notch(20.0, 300.0, 5.0, true),
            notch(20.0, 40.0, 5.0, true),
            notch(10.0, 10.0, 0.0, false),
        );
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &CornerRadius::all(0.0),
            Corner::TopRight,
            InvertedCornerUpdate::none(),
        );
        assert_eq!(resolved.height, 50.0);
    }

    #[test]
    fn size_raised_to_contain_roundness() {
        let corners = InvertedCorners::default().with(Corner::BottomLeft, notch(4.0, 4.0, 0.0, true));
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &CornerRadius::all(0.0),
            Corner::BottomLeft,
            InvertedCornerUpdate {
                roundness: Some(8.0),
                width: Some(3.0),
                ..InvertedCornerUpdate::none()
            },
        );
        assert_eq!(resolved.roundness, 8.0);
        assert_eq!(resolved.width, 16.0);
        assert_eq!(resolved.height, 16.0);
    }

    #[test]
    fn negative_space_resolves_to_zero() {
        let corners = InvertedCorners::new(
            notch(10.0, 10.0, 30.0, true),
            notch(90.0, 10.0, 30.0, true),
            notch(0.0, 0.0, 0.0, false),
            notch(0.0, 0.0, 0.0, false),
        );
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &CornerRadius::all(0.0),
            Corner::TopLeft,
            InvertedCornerUpdate::none(),
        );
        assert_eq!(resolved.width, 0.0);
    }

    #[test]
    fn roundness_change_alone_is_not_reclamped_against_width() {
        // Only width/height are pulled up to 2 * roundness; a roundness that
        // exceeds what the capped width can hold is kept as requested.
        let corners = InvertedCorners::new(
            notch(20.0, 20.0, 5.0, true),
            notch(60.0, 20.0, 5.0, true),
            notch(0.0, 0.0, 0.0, false),
            notch(0.0, 0.0, 0.0, false),
        );
        let resolved = resolve_inverted_corner(
            &square(),
            &corners,
            &CornerRadius::all(0.0),
            Corner::TopLeft,
            InvertedCornerUpdate::roundness(15.0),
        );
        assert_eq!(resolved.roundness, 15.0);
        // max width = 100 - 15 - 5 - 60
        assert_eq!(resolved.width, 20.0);
        assert!(resolved.roundness * 2.0 > resolved.width);
    }

    #[test]
    fn toggle_reclamps_stale_size() {
        let corners = ShapeParams::default()
            .inverted_corners
            .with(Corner::TopLeft, notch(500.0, 500.0, 10.0, false));
        let radii = CornerRadius::new(20.0, 0.0, 10.0, 10.0);
        let toggled = toggle_inverted(&square(), &corners, &radii, Corner::TopLeft);
        assert!(toggled.inverted);
        // tr is a 60 wide notch of roundness 10: 100 - 10 - 10 - 60
        assert_eq!(toggled.width, 20.0);
        // bl is a 20 high notch of roundness 10: 100 - 10 - 10 - 20
        assert_eq!(toggled.height, 60.0);

        let back = toggle_inverted(
            &square(),
            &corners.with(Corner::TopLeft, toggled),
            &radii,
            Corner::TopLeft,
        );
        assert!(!back.inverted);
    }

    #[test]
    fn notches_never_overlap_neighbors() {
        let canvas = Canvas::new(120.0, 80.0).unwrap();
        let radii = CornerRadius::new(12.0, 7.5, 30.0, 0.0);
        for mask in 0u8..16 {
            let mut corners = InvertedCorners::default();
            for corner in Corner::ALL {
                corners[corner] = notch(500.0, 500.0, 6.0, mask & (1 << corner.index()) != 0);
            }
            let resolved = resolve_inverted_corners(&canvas, &corners, &radii);
            for corner in Corner::ALL {
                let own = resolved[corner];
                assert!(own.width >= 0.0 && own.height >= 0.0);
                if !own.inverted {
                    continue;
                }
                let h = corner.horizontal_neighbor();
                let v = corner.vertical_neighbor();
                let free_w = canvas.width
                    - own.roundness
                    - neighbor_span(&resolved[h], radii[h], true);
                let free_h = canvas.height
                    - own.roundness
                    - neighbor_span(&resolved[v], radii[v], false);
                assert!(own.width <= free_w + EPSILON, "mask {mask} {corner:?} width");
                assert!(own.height <= free_h + EPSILON, "mask {mask} {corner:?} height");
            }
        }
    }

    #[test]
    fn resolve_params_is_idempotent() {
        let raw = ShapeParams::new(
            Canvas::new(140.0, 90.0).unwrap(),
            CornerRadius::new(70.0, -3.0, 12.346, 8.0),
            InvertedCorners::new(
                notch(400.0, 25.0, 8.0, true),
                notch(30.0, 30.0, 6.0, false),
                notch(25.5, 400.0, 4.0, true),
                notch(12.0, 12.0, 3.0, true),
            ),
            -2.0,
        );
        let once = resolve_params(&raw);
        let twice = resolve_params(&once);
        assert_eq!(once, twice);
        assert_eq!(once.corner_radius.tl, 45.0);
        assert_eq!(once.corner_radius.tr, 0.0);
        assert_eq!(once.corner_radius.br, 12.35);
        assert_eq!(once.border_width, 0.0);
    }

    #[test]
    fn default_params_are_already_resolved() {
        let defaults = ShapeParams::default();
        assert_eq!(resolve_params(&defaults), defaults);
    }
}
