//! Print the glyphs assembled from a sketch file.
//!
//! A sketch file is JSON of the form
//! `{"config": {...}, "glyphs": [{"character": "a", "strokes": ["M..."]}]}`.
//! The config is optional and may omit any field. Set `RUST_LOG` to see what
//! was skipped along the way.

use std::{io::Write, path::Path};

use handfont::{ArcPolicy, Config, GlyphSet, SvgPen};

mod sketch_file;

use sketch_file::SketchFile;

const DEFAULT_PRECISION: usize = 2;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let text = read_input(&args.input)?;
    let file = SketchFile::from_json(&text)
        .map_err(|e| Error(format!("invalid sketch '{}': {e}", args.input.display())))?;
    let config = apply_overrides(file.config.clone(), &args)?;
    let glyphs = file.sketch().assemble(&config).map_err(Error::new)?;
    let precision = args.precision.unwrap_or(DEFAULT_PRECISION);
    let stdout = std::io::stdout();
    print_glyphs(&mut stdout.lock(), &glyphs, precision).map_err(Error::new)
}

fn read_input(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path)
        .map_err(|e| Error(format!("failed to read '{}': {e}", path.display())))
}

fn apply_overrides(mut config: Config, args: &flags::Args) -> Result<Config, Error> {
    if let Some(units_per_em) = args.units_per_em {
        config.units_per_em = units_per_em;
    }
    if let Some(canvas_size) = args.canvas_size {
        config.canvas_size = canvas_size;
    }
    if let Some(family) = &args.family {
        config.family_name = family.clone();
    }
    if let Some(policy) = &args.arcs {
        config.arc_policy = parse_arc_policy(policy)?;
    }
    config.validate().map_err(Error::new)?;
    Ok(config)
}

fn parse_arc_policy(raw: &str) -> Result<ArcPolicy, Error> {
    match raw {
        "convert" => Ok(ArcPolicy::Convert),
        "preserve" => Ok(ArcPolicy::Preserve),
        "reject" => Ok(ArcPolicy::Reject),
        _ => Err(Error(format!(
            "Invalid arc policy '{}': expected convert, preserve or reject",
            raw.escape_default()
        ))),
    }
}

fn print_glyphs(out: &mut impl Write, glyphs: &GlyphSet, precision: usize) -> std::io::Result<()> {
    let info = glyphs.font_info();
    writeln!(out, "family: {} {}", info.family_name, info.style_name)?;
    writeln!(out, "file: {}", info.file_name("otf"))?;
    writeln!(out, "units per em: {}", info.units_per_em)?;
    writeln!(out, "ascender: {:.precision$}", info.ascender)?;
    writeln!(out, "descender: {:.precision$}", info.descender)?;
    writeln!(out, "glyphs: {}", glyphs.len())?;

    let mut pen = SvgPen::with_precision(precision);
    for glyph in glyphs {
        let codepoint = glyph
            .codepoint
            .map(|c| format!("U+{:04X}", c as u32))
            .unwrap_or_else(|| "-".into());
        writeln!(out)?;
        writeln!(
            out,
            "{} {codepoint} advance {:.precision$} lsb {:.precision$}",
            glyph.name, glyph.advance_width, glyph.left_side_bearing
        )?;
        pen.clear();
        glyph.draw(&mut pen);
        if !pen.is_empty() {
            writeln!(out, "  {pen}")?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Assemble a sketch and print its glyphs
        cmd args {
            required input: PathBuf
            /// Digits printed after the decimal point
            optional -p, --precision precision: usize
            optional --units-per-em units_per_em: u16
            optional --canvas-size canvas_size: f64
            optional --family family: String
            /// One of convert, preserve or reject
            optional --arcs policy: String
        }
    }
}
