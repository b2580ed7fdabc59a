//! Radius dragging as an explicit state machine.
//!
//! Pressing a corner handle starts a drag; every pointer move while dragging
//! yields a [`RadiusNudge`] for that corner; releasing ends it. Moves while
//! idle are ignored.

use crate::geometry::Corner;

/// Radius change per unit of pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.1;

/// Pointer position in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A requested change of one corner's radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusNudge {
    pub corner: Corner,
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        corner: Corner,
        last: PointerPosition,
    },
}

impl DragState {
    /// Starts dragging `corner`. Pressing while already dragging switches to
    /// the new corner.
    pub fn press(self, corner: Corner, at: PointerPosition) -> Self {
        DragState::Dragging { corner, last: at }
    }

    /// Moves the pointer.
    ///
    /// Pulling a handle toward the middle of the canvas grows its radius: the
    /// travel is projected onto the corner's inward diagonal using
    /// [`Corner::drag_signs`] and scaled by [`DRAG_SENSITIVITY`].
    pub fn move_to(self, at: PointerPosition) -> (Self, Option<RadiusNudge>) {
        match self {
            DragState::Idle => (self, None),
            DragState::Dragging { corner, last } => {
                let (sx, sy) = corner.drag_signs();
                let delta = ((at.x - last.x) * sx + (at.y - last.y) * sy) * DRAG_SENSITIVITY;
                (
                    DragState::Dragging { corner, last: at },
                    Some(RadiusNudge { corner, delta }),
                )
            }
        }
    }

    pub fn release(self) -> Self {
        DragState::Idle
    }

    pub fn active_corner(&self) -> Option<Corner> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { corner, .. } => Some(corner),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn idle_ignores_moves() {
        let (state, nudge) = DragState::Idle.move_to(PointerPosition::new(40.0, 40.0));
        assert_eq!(state, DragState::Idle);
        assert!(nudge.is_none());
    }

    #[test]
    fn press_move_release() {
        let state = DragState::default().press(Corner::TopLeft, PointerPosition::new(20.0, 20.0));
        assert_eq!(state.active_corner(), Some(Corner::TopLeft));

        let (state, nudge) = state.move_to(PointerPosition::new(30.0, 25.0));
        let nudge = nudge.unwrap();
        assert_eq!(nudge.corner, Corner::TopLeft);
        assert!(close(nudge.delta, 1.5));

        // The next move is measured from the previous one.
        let (state, nudge) = state.move_to(PointerPosition::new(30.0, 25.0));
        assert!(close(nudge.unwrap().delta, 0.0));

        let state = state.release();
        assert!(!state.is_dragging());
    }

    #[test]
    fn sign_pattern_per_corner() {
        let from = PointerPosition::new(50.0, 50.0);
        let to = PointerPosition::new(60.0, 70.0);
        let expected = [
            (Corner::TopLeft, 3.0),
            (Corner::TopRight, 1.0),
            (Corner::BottomRight, -3.0),
            (Corner::BottomLeft, -1.0),
        ];
        for (corner, delta) in expected {
            let (_, nudge) = DragState::Idle.press(corner, from).move_to(to);
            assert!(close(nudge.unwrap().delta, delta), "{corner:?}");
        }
    }
}
