//! Sinks for the build instructions of a glyph.
//!
//! Assembled outlines only contain moves, lines, cubic curves and closes, so
//! that is all a pen has to accept.

use core::fmt::{self, Write};

use kurbo::BezPath;

use crate::command::DrawCommand;

/// Receives an outline one segment at a time.
pub trait OutlinePen {
    /// Begins a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Cubic bezier from the current point through controls (cx0, cy0) and
    /// (cx1, cy1) to (x, y).
    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64);

    /// Closes the current subpath.
    fn close(&mut self);
}

/// Records the instructions as [`DrawCommand`]s.
impl OutlinePen for Vec<DrawCommand> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y })
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push(DrawCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(DrawCommand::Close)
    }
}

/// Builds a [`kurbo::BezPath`], the path type kurbo based font writers take.
#[derive(Clone, Default, Debug)]
pub struct BezPathPen {
    path: BezPath,
}

impl BezPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> BezPath {
        self.path
    }
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y))
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x, y))
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.path.curve_to((cx0, cy0), (cx1, cy1), (x, y))
    }

    fn close(&mut self) {
        self.path.close_path()
    }
}

/// Writes SVG path data, e.g. for previewing a glyph.
///
/// Coordinates are written as `x,y` pairs separated by spaces. Without a
/// precision, values use the shortest representation that round trips.
#[derive(Clone, Default, Debug)]
pub struct SvgPen {
    data: String,
    precision: Option<usize>,
}

impl SvgPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes every coordinate with `precision` digits after the decimal
    /// point.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            data: String::new(),
            precision: Some(precision),
        }
    }

    /// Discards the path data written so far, keeping the precision.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    fn command(&mut self, letter: char, points: &[(f64, f64)]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        for (i, &(x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            // writing into a String cannot fail
            let _ = match self.precision {
                Some(digits) => write!(self.data, "{x:.digits$},{y:.digits$}"),
                None => write!(self.data, "{x},{y}"),
            };
        }
    }
}

impl core::ops::Deref for SvgPen {
    type Target = str;

    fn deref(&self) -> &str {
        &self.data
    }
}

impl OutlinePen for SvgPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M', &[(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.command('L', &[(x, y)]);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.command('C', &[(cx0, cy0), (cx1, cy1), (x, y)]);
    }

    fn close(&mut self) {
        self.command('Z', &[]);
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
