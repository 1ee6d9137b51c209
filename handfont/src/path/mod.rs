//! Parsing of path data into normalized commands.
//!
//! Path data is processed in two passes: [`tokenize`] splits the text into
//! commands with one argument group each, and [`normalize`] resolves those
//! into absolute [`DrawCommand`](crate::DrawCommand)s.

mod normalize;
mod token;

pub use normalize::{elevate_quadratic, normalize, NormalizerState};
pub use token::{tokenize, PathVerb, RawPathToken};
