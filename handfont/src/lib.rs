//! Turning hand drawn strokes into font glyphs.
//!
//! A [`Sketch`] collects, for each character, the strokes drawn on a square
//! canvas as SVG path data. Assembling the sketch parses and normalizes every
//! stroke into absolute moveto, lineto and cubic curve commands, maps them
//! from canvas pixels into font design units and spaces each glyph so its
//! ink is centered within its advance.
//!
//! ```
//! use handfont::{Config, Sketch, SvgPen};
//!
//! let mut sketch = Sketch::new();
//! sketch
//!     .add_stroke('t', "M100,50 L100,300")
//!     .add_stroke('t', "M60,120 L160,120");
//! let glyphs = sketch.assemble(&Config::default()).unwrap();
//! assert_eq!(glyphs.len(), 2);
//!
//! let mut pen = SvgPen::with_precision(1);
//! glyphs.get('t').unwrap().draw(&mut pen);
//! assert!(pen.starts_with('M'));
//! ```
//!
//! The result is a [`GlyphSet`]: a `.notdef` glyph followed by one [`Glyph`]
//! per drawn character, plus the [`FontInfo`] a font builder needs. Writing
//! the binary font file is left to the caller; glyph outlines can be replayed
//! into any [`OutlinePen`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod path;
pub mod sample;

mod arc;
mod assemble;
mod command;
mod config;
mod error;
mod metrics;
mod outline;
mod pen;

pub use arc::convert_arcs;
pub use assemble::{
    glyph_name, FontInfo, Glyph, GlyphAssembler, GlyphSet, Sketch, NOTDEF_ADVANCE, NOTDEF_NAME,
    SIDE_BEARING_RATIO,
};
pub use command::DrawCommand;
pub use config::{ArcPolicy, Config};
pub use error::{AssembleError, ConfigError};
pub use metrics::{FontMetricsContext, ASCENDER_RATIO, DEFAULT_BASELINE_RATIO, DESCENDER_RATIO};
pub use outline::Outline;
pub use pen::{BezPathPen, OutlinePen, SvgPen};

pub use handfont_types::{BoundingBox, Point};
