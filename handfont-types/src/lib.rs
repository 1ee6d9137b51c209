//! Scalar geometry shared by the handfont crates.
//!
//! A two dimensional [`Point`] and the horizontal [`BoundingBox`] used for
//! glyph spacing.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod point;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use bbox::BoundingBox;
pub use point::Point;
