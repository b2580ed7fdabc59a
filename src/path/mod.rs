//! Outline paths and their SVG path-data form.
//!
//! A [`Path`] is a list of [`PathCommand`]s using absolute coordinates and
//! only the commands the engine needs: move, horizontal line, vertical line,
//! circular arc and close. Its [`Display`](std::fmt::Display) impl writes the
//! SVG path-data text that exporters embed verbatim:
//!
//! ```text
//! M20,0H100A0,0 0,0,1 100,0V90A10,10 0,0,1 90,100 ... Z
//! ```
//!
//! Path construction lives in [`outline`].

pub mod outline;

pub use outline::{generate_border_path, generate_fill_path};

use std::fmt;

use crate::numeric::Num;

// ============================================================================
// Commands
// ============================================================================

/// Arc direction. Convex corners turn with the clockwise walk, the inner
/// corner of a notch turns against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Flag `0`.
    CounterClockwise,
    /// Flag `1`.
    Clockwise,
}

impl Sweep {
    pub fn flag(self) -> u8 {
        match self {
            Sweep::CounterClockwise => 0,
            Sweep::Clockwise => 1,
        }
    }
}

/// One drawing command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    Horizontal { x: f64 },
    Vertical { y: f64 },
    /// A circular arc (`rx == ry`) with no rotation and the small-arc flag.
    Arc { radius: f64, sweep: Sweep, x: f64, y: f64 },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M{},{}", Num(x), Num(y)),
            PathCommand::Horizontal { x } => write!(f, "H{}", Num(x)),
            PathCommand::Vertical { y } => write!(f, "V{}", Num(y)),
            PathCommand::Arc { radius, sweep, x, y } => write!(
                f,
                "A{r},{r} 0,0,{} {},{}",
                sweep.flag(),
                Num(x),
                Num(y),
                r = Num(radius)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

// ============================================================================
// Path
// ============================================================================

/// A closed outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The point of the first move command.
    pub fn start_point(&self) -> Option<(f64, f64)> {
        self.commands.iter().find_map(|c| match *c {
            PathCommand::MoveTo { x, y } => Some((x, y)),
            _ => None,
        })
    }

    /// The current point after every command has been applied, ignoring the
    /// implicit line drawn by [`PathCommand::Close`].
    pub fn end_point(&self) -> Option<(f64, f64)> {
        self.commands
            .iter()
            .zip(self.points())
            .filter(|(command, _)| !matches!(command, PathCommand::Close))
            .last()
            .map(|(_, (_, to))| to)
    }

    /// Total outline length: straight runs plus arc lengths.
    ///
    /// Zero-radius arcs count as straight lines. Radii too small for their
    /// chord are scaled up the way SVG renderers do, giving a half circle.
    pub fn length(&self) -> f64 {
        self.commands
            .iter()
            .zip(self.points())
            .map(|(command, (from, to))| {
                let chord = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
                match *command {
                    PathCommand::Arc { radius, .. } if radius > 0.0 && chord > 0.0 => {
                        let radius = radius.max(chord / 2.0);
                        let angle = 2.0 * (chord / (2.0 * radius)).min(1.0).asin();
                        radius * angle
                    }
                    PathCommand::MoveTo { .. } => 0.0,
                    _ => chord,
                }
            })
            .sum()
    }

    /// `(from, to)` for every command, in order.
    fn points(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut current = (0.0, 0.0);
        let mut start = current;
        self.commands
            .iter()
            .map(|command| {
                let from = current;
                current = match *command {
                    PathCommand::MoveTo { x, y } => {
                        start = (x, y);
                        (x, y)
                    }
                    PathCommand::Horizontal { x } => (x, current.1),
                    PathCommand::Vertical { y } => (current.0, y),
                    PathCommand::Arc { x, y, .. } => (x, y),
                    PathCommand::Close => start,
                };
                (from, current)
            })
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Path {
        let mut path = Path::new();
        path.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
        path.push(PathCommand::Horizontal { x: size });
        path.push(PathCommand::Vertical { y: size });
        path.push(PathCommand::Horizontal { x: 0.0 });
        path.push(PathCommand::Vertical { y: 0.0 });
        path.push(PathCommand::Close);
        path
    }

    #[test]
    fn command_text() {
        let arc = PathCommand::Arc {
            radius: 12.5,
            sweep: Sweep::CounterClockwise,
            x: 3.0,
            y: 40.25,
        };
        assert_eq!(arc.to_string(), "A12.5,12.5 0,0,0 3,40.25");
        assert_eq!(PathCommand::MoveTo { x: 1.0, y: 2.0 }.to_string(), "M1,2");
        assert_eq!(PathCommand::Horizontal { x: 7.0 }.to_string(), "H7");
        assert_eq!(PathCommand::Vertical { y: 0.5 }.to_string(), "V0.5");
        assert_eq!(PathCommand::Close.to_string(), "Z");
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        assert_eq!(PathCommand::Horizontal { x: -0.0 }.to_string(), "H0");
    }

    #[test]
    fn path_text_has_no_separators() {
        assert_eq!(square(10.0).to_string(), "M0,0H10V10H0V0Z");
    }

    #[test]
    fn start_and_end_points() {
        let path = square(10.0);
        assert_eq!(path.start_point(), Some((0.0, 0.0)));
        assert_eq!(path.end_point(), Some((0.0, 0.0)));
        assert_eq!(Path::new().start_point(), None);
    }

    #[test]
    fn length_counts_lines_and_arcs() {
        assert_eq!(square(10.0).length(), 40.0);

        let mut quarter = Path::new();
        quarter.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
        quarter.push(PathCommand::Arc {
            radius: 10.0,
            sweep: Sweep::Clockwise,
            x: 10.0,
            y: 10.0,
        });
        let expected = std::f64::consts::PI * 10.0 / 2.0;
        assert!((quarter.length() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_radius_arc_is_straight() {
        let mut path = Path::new();
        path.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
        path.push(PathCommand::Arc {
            radius: 0.0,
            sweep: Sweep::Clockwise,
            x: 3.0,
            y: 4.0,
        });
        assert_eq!(path.length(), 5.0);
    }
}
