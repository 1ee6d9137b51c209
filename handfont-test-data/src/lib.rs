//! test data shared between the handfont crates.
//!
//! Every path here is in canvas pixels on the default 500 pixel canvas, with
//! y growing downward and the baseline at y = 350.

/// A single vertical stroke from the x-height down to the baseline.
pub static VERTICAL_STROKE: &str = "M 100,100 L 100,300";

/// Lowercase t: a stem and a crossbar drawn as two strokes.
pub static LOWERCASE_T: &[&str] = &["M150,60 L150,330", "M100,140 L210,140"];

/// Lowercase o as a closed cubic loop.
pub static LOWERCASE_O_CUBIC: &str =
    "M160,180 C210,180 240,220 240,265 C240,310 210,350 160,350 \
     C110,350 80,310 80,265 C80,220 110,180 160,180 Z";

/// Lowercase o as two elliptical arcs.
pub static LOWERCASE_O_ARCS: &str = "M80,265 A80,85 0 0 1 240,265 A80,85 0 0 1 80,265 Z";

/// Lowercase s using relative smooth cubic curves.
pub static LOWERCASE_S_SMOOTH: &str = "M220,190 c-20,-15 -90,-20 -90,20 s110,40 100,90 s-80,45 -110,10";

/// Lowercase u using a quadratic curve followed by a smooth quadratic.
pub static LOWERCASE_U_QUADRATIC: &str = "M90,180 L90,270 Q90,350 160,350 T230,270 L230,180";

/// Lowercase n drawn with relative lines and horizontal/vertical commands.
pub static LOWERCASE_N_RELATIVE: &str = "m90,350 v-170 m0,40 q30,-40 70,-40 h20 q40,0 40,50 V350";

/// Moveto with implicit lineto pairs, in compact number form.
pub static ZIGZAG_COMPACT: &str = "M10-5.5.5 20 30.25,10e1-4-4";

/// Path data mixing valid commands with junk that must be skipped.
pub static MALFORMED: &str = "junk M10,10 L20 L30,30 ?? C1,2,3 Q40,40 50,50 Z";

/// Path data with no usable commands at all.
pub static ALL_JUNK: &str = "?? 12 34 junk";

/// Raw pen samples for a short downward stroke.
pub static SAMPLES_STROKE: &[(f64, f64)] = &[
    (120.0, 110.0),
    (121.5, 140.0),
    (123.0, 180.0),
    (123.5, 230.0),
    (123.0, 280.0),
    (122.0, 330.0),
];

/// Raw pen samples for a closed loop.
pub static SAMPLES_LOOP: &[(f64, f64)] = &[
    (160.0, 180.0),
    (220.0, 200.0),
    (240.0, 265.0),
    (210.0, 330.0),
    (160.0, 350.0),
    (100.0, 330.0),
    (80.0, 265.0),
    (100.0, 200.0),
    (160.0, 180.0),
];

/// A sketch file as read by the `strokedump` tool.
pub static SKETCH_JSON: &str = r#"{
    "config": { "family_name": "Test Hand", "units_per_em": 2048 },
    "glyphs": [
        { "character": "l", "strokes": ["M 100,100 L 100,300"] },
        { "character": "t", "strokes": ["M150,60 L150,330", "M100,140 L210,140"] },
        { "character": " ", "strokes": [] }
    ]
}"#;
