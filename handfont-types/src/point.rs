//! Points in canvas pixels or font units.

use core::ops::{Add, Mul, Sub};

/// A coordinate pair.
///
/// Geometry is only defined for `f64` coordinates; other coordinate types
/// are for storage only.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    /// Grows downward on the canvas and upward in font units.
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point<f64> {
    /// The origin, where every path starts before its first moveto.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Reflects `other` through this point, i.e. `2 * self - other`.
    ///
    /// This is how the implied control point of a smooth curve segment is
    /// derived from the previous segment's last control point.
    #[inline]
    pub fn reflect(self, other: Self) -> Self {
        Self::new(2.0 * self.x - other.x, 2.0 * self.y - other.y)
    }

    /// Linear interpolation from `self` towards `other` by `t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// The point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point<f64> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point<f64> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point<f64> {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl From<(f64, f64)> for Point<f64> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point<f64>> for (f64, f64) {
    fn from(point: Point<f64>) -> Self {
        (point.x, point.y)
    }
}
