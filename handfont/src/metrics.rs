//! Mapping from canvas pixels to font design units.
//!
//! The drawing canvas is a square of `canvas_size` pixels with y growing
//! downward. The baseline sits at `baseline_ratio` of the canvas height, the
//! ascender line [`ASCENDER_RATIO`] of the canvas above it and the descender
//! line [`DESCENDER_RATIO`] of the canvas below it. The distance between the
//! ascender and descender lines is scaled to one em.

use handfont_types::Point;

use crate::{command::DrawCommand, error::ConfigError, outline::Outline};

/// Default position of the baseline as a fraction of the canvas height.
pub const DEFAULT_BASELINE_RATIO: f64 = 0.70;
/// Height of the ascender line above the baseline, as a fraction of the
/// canvas height.
pub const ASCENDER_RATIO: f64 = 0.65;
/// Depth of the descender line below the baseline, as a fraction of the
/// canvas height.
pub const DESCENDER_RATIO: f64 = 0.27;

/// Smallest and largest em sizes accepted by font formats.
const UNITS_PER_EM_RANGE: core::ops::RangeInclusive<u16> = 16..=16384;

/// Canvas geometry and em size used to map drawings into font space.
///
/// This is a plain value; every mapping is a pure function of a point, the
/// context and a horizontal offset.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontMetricsContext {
    canvas_size: f64,
    units_per_em: u16,
    baseline_ratio: f64,
}

impl FontMetricsContext {
    /// Creates a new context, checking that it describes a usable mapping.
    pub fn new(
        canvas_size: f64,
        units_per_em: u16,
        baseline_ratio: f64,
    ) -> Result<Self, ConfigError> {
        if !canvas_size.is_finite() || canvas_size <= 0.0 {
            return Err(ConfigError::InvalidCanvasSize(canvas_size));
        }
        if !UNITS_PER_EM_RANGE.contains(&units_per_em) {
            return Err(ConfigError::InvalidUnitsPerEm(units_per_em));
        }
        if !baseline_ratio.is_finite() {
            return Err(ConfigError::InvalidBaselineRatio(baseline_ratio));
        }
        Ok(Self {
            canvas_size,
            units_per_em,
            baseline_ratio,
        })
    }

    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn baseline_ratio(&self) -> f64 {
        self.baseline_ratio
    }

    /// Y position of the baseline on the canvas, in pixels.
    pub fn baseline(&self) -> f64 {
        self.canvas_size * self.baseline_ratio
    }

    /// Y position of the ascender line on the canvas, in pixels.
    pub fn ascender_line(&self) -> f64 {
        self.baseline() - self.canvas_size * ASCENDER_RATIO
    }

    /// Y position of the descender line on the canvas, in pixels.
    pub fn descender_line(&self) -> f64 {
        self.baseline() + self.canvas_size * DESCENDER_RATIO
    }

    /// Design units per canvas pixel.
    pub fn scale(&self) -> f64 {
        let glyph_height = self.descender_line() - self.ascender_line();
        self.units_per_em as f64 / glyph_height
    }

    /// Font-wide ascender in design units.
    pub fn ascender(&self) -> f64 {
        (self.baseline() - self.ascender_line()) * self.scale()
    }

    /// Font-wide descender in design units; negative below the baseline.
    pub fn descender(&self) -> f64 {
        -(self.descender_line() - self.baseline()) * self.scale()
    }

    /// Maps a canvas point to font space, flipping the y axis and shifting
    /// horizontally by `horizontal_offset` design units.
    pub fn map(&self, point: Point<f64>, horizontal_offset: f64) -> Point<f64> {
        let scale = self.scale();
        Point::new(
            point.x * scale + horizontal_offset,
            (self.baseline() - point.y) * scale,
        )
    }

    /// Inverse of [`map`](Self::map) for the same offset.
    pub fn unmap(&self, point: Point<f64>, horizontal_offset: f64) -> Point<f64> {
        let scale = self.scale();
        Point::new(
            (point.x - horizontal_offset) / scale,
            self.baseline() - point.y / scale,
        )
    }

    /// Maps every coordinate pair of a command.
    ///
    /// Arc radii are left untouched.
    pub fn map_command(&self, command: DrawCommand, horizontal_offset: f64) -> DrawCommand {
        command.map_points(|p| self.map(p, horizontal_offset))
    }

    /// Maps every coordinate pair of an outline.
    pub fn map_outline(&self, outline: &Outline, horizontal_offset: f64) -> Outline {
        outline.map_points(|p| self.map(p, horizontal_offset))
    }
}

impl Default for FontMetricsContext {
    fn default() -> Self {
        Self {
            canvas_size: 500.0,
            units_per_em: 1000,
            baseline_ratio: DEFAULT_BASELINE_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} != {expected} (diff {})",
            (actual - expected).abs()
        );
    }

    #[test]
    fn default_lines() {
        let metrics = FontMetricsContext::default();
        assert_near(metrics.baseline(), 350.0);
        assert_near(metrics.ascender_line(), 25.0);
        assert_near(metrics.descender_line(), 485.0);
        assert_near(metrics.scale(), 1000.0 / 460.0);
    }

    #[test]
    fn ascender_and_descender() {
        let metrics = FontMetricsContext::default();
        assert_near(metrics.ascender(), 325.0 * 1000.0 / 460.0);
        assert_near(metrics.descender(), -135.0 * 1000.0 / 460.0);
        // together they span one em
        assert_near(metrics.ascender() - metrics.descender(), 1000.0);
    }

    #[test]
    fn baseline_maps_to_zero_and_y_flips() {
        let metrics = FontMetricsContext::default();
        let on_baseline = metrics.map(Point::new(0.0, 350.0), 0.0);
        assert_near(on_baseline.y, 0.0);
        let above = metrics.map(Point::new(0.0, 300.0), 0.0);
        let below = metrics.map(Point::new(0.0, 400.0), 0.0);
        assert!(above.y > 0.0 && below.y < 0.0);
        // ascender line maps to the font ascender
        assert_near(metrics.map(Point::new(0.0, 25.0), 0.0).y, metrics.ascender());
    }

    #[test]
    fn horizontal_offset_only_moves_x() {
        let metrics = FontMetricsContext::default();
        let p = Point::new(120.0, 200.0);
        let plain = metrics.map(p, 0.0);
        let shifted = metrics.map(p, 37.5);
        assert_near(shifted.x - plain.x, 37.5);
        assert_near(shifted.y, plain.y);
    }

    #[test]
    fn map_then_unmap_round_trips() {
        for (canvas, upem, offset) in [(500.0, 1000, 0.0), (320.0, 2048, -41.25), (1e4, 16, 3.5)] {
            let metrics = FontMetricsContext::new(canvas, upem, DEFAULT_BASELINE_RATIO).unwrap();
            for p in [
                Point::new(0.0, 0.0),
                Point::new(123.456, 78.9),
                Point::new(-50.0, 999.0),
            ] {
                let back = metrics.unmap(metrics.map(p, offset), offset);
                assert!(
                    (back.x - p.x).abs() < 1e-9 && (back.y - p.y).abs() < 1e-9,
                    "{p:?} -> {back:?}"
                );
            }
        }
    }

    #[test]
    fn arc_radii_stay_in_pixels() {
        let metrics = FontMetricsContext::default();
        let arc = DrawCommand::ArcTo {
            rx: 10.0,
            ry: 20.0,
            x_rotation: 0.0,
            large_arc: false,
            sweep: false,
            x: 0.0,
            y: 350.0,
        };
        let DrawCommand::ArcTo { rx, ry, x, y, .. } = metrics.map_command(arc, 5.0) else {
            panic!("arc changed kind");
        };
        assert_eq!((rx, ry), (10.0, 20.0));
        assert_near(x, 5.0);
        assert_near(y, 0.0);
    }

    #[test]
    fn rejects_unusable_contexts() {
        assert_eq!(
            FontMetricsContext::new(0.0, 1000, 0.7),
            Err(ConfigError::InvalidCanvasSize(0.0))
        );
        assert!(matches!(
            FontMetricsContext::new(f64::NAN, 1000, 0.7),
            Err(ConfigError::InvalidCanvasSize(_))
        ));
        assert_eq!(
            FontMetricsContext::new(500.0, 8, 0.7),
            Err(ConfigError::InvalidUnitsPerEm(8))
        );
        assert!(matches!(
            FontMetricsContext::new(500.0, 1000, f64::INFINITY),
            Err(ConfigError::InvalidBaselineRatio(_))
        ));
    }
}
