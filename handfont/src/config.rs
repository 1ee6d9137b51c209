//! Pipeline configuration.

use crate::{error::ConfigError, metrics::FontMetricsContext};

/// What to do with elliptical arcs found in stroke paths.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArcPolicy {
    /// Approximate each arc with cubic bezier curves before mapping.
    #[default]
    Convert,
    /// Keep arcs as they are. Only the endpoint is mapped to font units, so
    /// the radii of a kept arc remain in canvas pixels.
    Preserve,
    /// Fail assembly when any stroke contains an arc.
    Reject,
}

/// Settings for turning a sketch into a glyph set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Size of the design grid.
    pub units_per_em: u16,
    /// Width and height of the square drawing canvas, in pixels.
    pub canvas_size: f64,
    /// Position of the baseline as a fraction of the canvas height.
    pub baseline_ratio: f64,
    /// Passed through to the font builder.
    pub family_name: String,
    /// Passed through to the font builder.
    pub style_name: String,
    pub arc_policy: ArcPolicy,
    /// Maximum deviation, in canvas pixels, of converted arcs.
    pub arc_tolerance: f64,
}

impl Config {
    /// Builds the coordinate mapping described by this configuration.
    pub fn metrics(&self) -> Result<FontMetricsContext, ConfigError> {
        FontMetricsContext::new(self.canvas_size, self.units_per_em, self.baseline_ratio)
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics()?;
        if !self.arc_tolerance.is_finite() || self.arc_tolerance <= 0.0 {
            return Err(ConfigError::InvalidArcTolerance(self.arc_tolerance));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let metrics = FontMetricsContext::default();
        Self {
            units_per_em: metrics.units_per_em(),
            canvas_size: metrics.canvas_size(),
            baseline_ratio: metrics.baseline_ratio(),
            family_name: "my-handwritten-font".into(),
            style_name: "Regular".into(),
            arc_policy: ArcPolicy::default(),
            arc_tolerance: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.metrics(), Ok(FontMetricsContext::default()));
    }

    #[test]
    fn invalid_tolerance() {
        let config = Config {
            arc_tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidArcTolerance(0.0))
        );
    }

    #[test]
    fn metrics_errors_come_first() {
        let config = Config {
            units_per_em: 0,
            arc_tolerance: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidUnitsPerEm(0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"units_per_em": 2048, "arc_policy": "reject"}"#).unwrap();
        assert_eq!(config.units_per_em, 2048);
        assert_eq!(config.arc_policy, ArcPolicy::Reject);
        assert_eq!(config.family_name, "my-handwritten-font");
    }
}
