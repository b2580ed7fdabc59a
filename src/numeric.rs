//! Small numeric helpers shared by the resolver and the share-URL codec.

use std::fmt;

use crate::geometry::Canvas;

/// Returns integers unchanged and rounds everything else to 2 decimal places.
///
/// This is the single canonicalization point for user-facing values. It keeps
/// floating point noise (`33.330000000000005`) from producing paths that look
/// the same but differ as text.
pub fn canonicalize(value: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// Writes a number in the shortest form that parses back to the same value,
/// never as `-0`. Used for path data and share URLs alike.
pub(crate) struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 == +0.0
        write!(f, "{}", self.0 + 0.0)
    }
}

/// Euclid's algorithm.
pub fn greatest_common_divisor(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { greatest_common_divisor(b, a % b) }
}

/// A reduced `width:height` ratio, e.g. `2:3` for a 100x150 canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    /// Reduces the canvas dimensions by their greatest common divisor.
    ///
    /// Works on hundredths so canonical 2-decimal dimensions reduce exactly.
    pub fn of(canvas: &Canvas) -> Self {
        let w = (canvas.width * 100.0).round() as u64;
        let h = (canvas.height * 100.0).round() as u64;
        let divisor = greatest_common_divisor(w, h).max(1);
        Self {
            width: (w / divisor) as f64,
            height: (h / divisor) as f64,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}
