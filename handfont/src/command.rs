//! Normalized drawing commands.

use handfont_types::Point;

/// Single element of a normalized outline.
///
/// Every coordinate is absolute. Quadratic and smooth curve commands never
/// appear here; they are converted to [`CurveTo`](Self::CurveTo) during
/// normalization.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f64, y: f64 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f64, y: f64 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f64,
        cy0: f64,
        cx1: f64,
        cy1: f64,
        x: f64,
        y: f64,
    },
    /// Draw an elliptical arc from the current point to (x, y).
    ///
    /// `x_rotation` is in degrees. Only the endpoint takes part in coordinate
    /// mapping; the radii are whatever units the arc was drawn in.
    ArcTo {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    /// Close the current subpath.
    Close,
}

impl DrawCommand {
    pub(crate) fn move_to(p: Point<f64>) -> Self {
        Self::MoveTo { x: p.x, y: p.y }
    }

    pub(crate) fn line_to(p: Point<f64>) -> Self {
        Self::LineTo { x: p.x, y: p.y }
    }

    pub(crate) fn curve_to(c0: Point<f64>, c1: Point<f64>, p: Point<f64>) -> Self {
        Self::CurveTo {
            cx0: c0.x,
            cy0: c0.y,
            cx1: c1.x,
            cy1: c1.y,
            x: p.x,
            y: p.y,
        }
    }

    /// The point where the pen rests after this command, if the command
    /// carries one.
    pub fn end_point(&self) -> Option<Point<f64>> {
        match *self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::CurveTo { x, y, .. }
            | Self::ArcTo { x, y, .. } => Some(Point::new(x, y)),
            Self::Close => None,
        }
    }

    /// Iterates the x coordinate of every on and off curve point.
    ///
    /// Arc radii are not coordinates and are skipped.
    pub fn x_coords(&self) -> impl Iterator<Item = f64> {
        let (xs, len) = match *self {
            Self::MoveTo { x, .. } | Self::LineTo { x, .. } | Self::ArcTo { x, .. } => {
                ([x, 0.0, 0.0], 1)
            }
            Self::CurveTo { cx0, cx1, x, .. } => ([cx0, cx1, x], 3),
            Self::Close => ([0.0; 3], 0),
        };
        xs.into_iter().take(len)
    }

    /// Returns a copy with `f` applied to every coordinate pair.
    pub fn map_points(self, mut f: impl FnMut(Point<f64>) -> Point<f64>) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::move_to(f(Point::new(x, y))),
            Self::LineTo { x, y } => Self::line_to(f(Point::new(x, y))),
            Self::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => Self::curve_to(
                f(Point::new(cx0, cy0)),
                f(Point::new(cx1, cy1)),
                f(Point::new(x, y)),
            ),
            Self::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let p = f(Point::new(x, y));
                Self::ArcTo {
                    rx,
                    ry,
                    x_rotation,
                    large_arc,
                    sweep,
                    x: p.x,
                    y: p.y,
                }
            }
            Self::Close => Self::Close,
        }
    }
}
