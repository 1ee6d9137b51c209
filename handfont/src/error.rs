//! Errors that occur when configuring or assembling glyphs.

use core::fmt;

/// A configuration value that cannot produce a usable coordinate mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Units per em outside the range permitted by font formats.
    InvalidUnitsPerEm(u16),
    /// Canvas size that is not a positive, finite number of pixels.
    InvalidCanvasSize(f64),
    /// Baseline ratio that is not finite.
    InvalidBaselineRatio(f64),
    /// Arc flattening tolerance that is not a positive, finite number.
    InvalidArcTolerance(f64),
}

/// An error occurred while assembling the glyph set.
#[derive(Clone, Debug, PartialEq)]
pub enum AssembleError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A stroke for this character contains an elliptical arc and the arc
    /// policy forbids them.
    UnsupportedArc(char),
}

impl From<ConfigError> for AssembleError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidUnitsPerEm(upem) => {
                write!(f, "units per em must be between 16 and 16384, found {upem}")
            }
            Self::InvalidCanvasSize(size) => {
                write!(f, "canvas size must be a positive number of pixels, found {size}")
            }
            Self::InvalidBaselineRatio(ratio) => {
                write!(f, "baseline ratio must be finite, found {ratio}")
            }
            Self::InvalidArcTolerance(tolerance) => {
                write!(f, "arc tolerance must be positive, found {tolerance}")
            }
        }
    }
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::UnsupportedArc(c) => write!(
                f,
                "unsupported curve type: glyph '{}' contains an elliptical arc",
                c.escape_default()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for AssembleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::UnsupportedArc(_) => None,
        }
    }
}
