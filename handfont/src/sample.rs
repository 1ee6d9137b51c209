//! Turning raw pen samples into stroke path data.
//!
//! A drawing surface records a polyline of pointer positions while the pen
//! is down. Those samples are smoothed into a chain of quadratic curves that
//! pass through the midpoints between consecutive samples, using the samples
//! themselves as control points.

use core::fmt::Write;

use handfont_types::Point;

/// Fewer samples than this produce no path.
pub const MIN_SAMPLES: usize = 4;

/// Builds path data for a stroke from its pen samples.
///
/// The result has the form `M p0 Q p1 mid(p1,p2) T mid(p2,p3) ...`, with every
/// coordinate printed to two decimal places, followed by `Z` when `closed` is
/// set. Strokes with fewer than [`MIN_SAMPLES`] samples, such as a stray
/// click, yield an empty string.
pub fn path_from_samples(samples: &[Point<f64>], closed: bool) -> String {
    if samples.len() < MIN_SAMPLES {
        return String::new();
    }
    let mut path = String::new();
    let (a, b, c) = (samples[0], samples[1], samples[2]);
    let mid = b.midpoint(c);
    let _ = write!(
        path,
        "M{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2} T",
        a.x, a.y, b.x, b.y, mid.x, mid.y
    );
    for pair in samples[2..].windows(2) {
        let mid = pair[0].midpoint(pair[1]);
        let _ = write!(path, "{:.2},{:.2} ", mid.x, mid.y);
    }
    if closed {
        path.push('Z');
    }
    path
}
