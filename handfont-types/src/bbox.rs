/// Horizontal extent of a region.
///
/// Glyph spacing only depends on how wide the ink is, so unlike a full
/// rectangle this tracks the x axis alone.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction-- the left side of a region.
    pub x_min: T,
    /// Maximum extent in the x direction-- the right side of a region.
    pub x_max: T,
}

impl BoundingBox<f64> {
    /// Returns a zero-width box located at `x`.
    pub const fn from_x(x: f64) -> Self {
        Self { x_min: x, x_max: x }
    }

    /// Computes the extent of a sequence of x coordinates.
    ///
    /// Returns `None` if the sequence is empty.
    pub fn from_xs(xs: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut xs = xs.into_iter();
        let first = Self::from_x(xs.next()?);
        Some(xs.fold(first, |bbox, x| bbox.include(x)))
    }

    /// Returns a box grown, if needed, to contain `x`.
    pub fn include(self, x: f64) -> Self {
        Self {
            x_min: self.x_min.min(x),
            x_max: self.x_max.max(x),
        }
    }

    /// Distance between the left and right sides.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// The x coordinate halfway between the left and right sides.
    pub fn center(&self) -> f64 {
        (self.x_min + self.x_max) / 2.0
    }
}
