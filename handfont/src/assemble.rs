//! Assembly of drawn characters into a glyph set.

use indexmap::IndexMap;

use handfont_types::Point;

use crate::{
    arc::convert_arcs,
    config::{ArcPolicy, Config},
    error::{AssembleError, ConfigError},
    metrics::FontMetricsContext,
    outline::Outline,
    pen::OutlinePen,
    sample::path_from_samples,
};

/// Advance width of the `.notdef` glyph, in design units.
pub const NOTDEF_ADVANCE: f64 = 300.0;

/// Side bearing on each side of a glyph, as a fraction of the em.
pub const SIDE_BEARING_RATIO: f64 = 0.05;

/// Name of the mandatory first glyph.
pub const NOTDEF_NAME: &str = ".notdef";

/// The strokes drawn for each character, in the order characters were added.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sketch {
    strokes: IndexMap<char, Vec<String>>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character with no strokes, if it is not present yet.
    ///
    /// This reserves the character's position in the glyph order.
    pub fn add_character(&mut self, character: char) -> &mut Self {
        self.strokes.entry(character).or_default();
        self
    }

    /// Appends a stroke, given as path data, to a character.
    ///
    /// A character keeps the position at which it was first added.
    pub fn add_stroke(&mut self, character: char, path: impl Into<String>) -> &mut Self {
        self.strokes.entry(character).or_default().push(path.into());
        self
    }

    /// Appends a stroke given as raw pen samples.
    ///
    /// See [`path_from_samples`] for how samples are smoothed. Too few
    /// samples still reserve the character but add no stroke.
    pub fn add_samples(
        &mut self,
        character: char,
        samples: &[Point<f64>],
        closed: bool,
    ) -> &mut Self {
        let path = path_from_samples(samples, closed);
        if path.is_empty() {
            return self.add_character(character);
        }
        self.add_stroke(character, path)
    }

    /// The strokes of one character.
    pub fn strokes(&self, character: char) -> Option<&[String]> {
        self.strokes.get(&character).map(Vec::as_slice)
    }

    /// Characters in the order they were added.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.strokes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Turns the sketch into a glyph set using `config`.
    pub fn assemble(&self, config: &Config) -> Result<GlyphSet, AssembleError> {
        GlyphAssembler::new(config)?.assemble(self)
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for Sketch {
    fn from_iter<T: IntoIterator<Item = (char, S)>>(iter: T) -> Self {
        let mut sketch = Sketch::new();
        for (character, path) in iter {
            sketch.add_stroke(character, path);
        }
        sketch
    }
}

/// A glyph ready to be handed to a font builder.
///
/// The outline is in font design units with y pointing up and the origin on
/// the baseline at the left edge of the advance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Glyph {
    pub name: String,
    /// `None` for `.notdef`.
    pub codepoint: Option<char>,
    pub outline: Outline,
    pub advance_width: f64,
    pub left_side_bearing: f64,
}

impl Glyph {
    /// The mandatory first glyph of every font.
    pub fn notdef() -> Self {
        Self {
            name: NOTDEF_NAME.into(),
            codepoint: None,
            outline: Outline::default(),
            advance_width: NOTDEF_ADVANCE,
            left_side_bearing: 0.0,
        }
    }

    /// Emits the build instructions for this glyph's outline.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        self.outline.draw(pen)
    }
}

/// Font-wide values passed alongside the glyphs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontInfo {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: u16,
    pub ascender: f64,
    pub descender: f64,
}

impl FontInfo {
    /// A file name for the finished font: the family name lowercased, with
    /// runs of whitespace replaced by `-` and anything other than ASCII
    /// letters, digits, `-` and `.` removed.
    pub fn file_name(&self, extension: &str) -> String {
        let stem = self
            .family_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{stem}.{extension}")
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.'))
            .collect()
    }
}

/// The assembled glyphs: `.notdef` first, then drawn characters in the
/// order they were added.
///
/// Only [`GlyphAssembler`] creates glyph sets, which keeps `.notdef` in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlyphSet {
    info: FontInfo,
    glyphs: Vec<Glyph>,
}

impl GlyphSet {
    pub fn font_info(&self) -> &FontInfo {
        &self.info
    }

    /// All glyphs, `.notdef` first.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn notdef(&self) -> &Glyph {
        // always pushed first by the assembler
        &self.glyphs[0]
    }

    /// Looks up the glyph for a character.
    pub fn get(&self, character: char) -> Option<&Glyph> {
        self.glyphs
            .iter()
            .find(|glyph| glyph.codepoint == Some(character))
    }

    /// Number of glyphs, including `.notdef`.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always `false`; `.notdef` is always present.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.glyphs.iter()
    }

    /// Hands the font info and glyphs, `.notdef` first, to a font builder.
    pub fn into_parts(self) -> (FontInfo, Vec<Glyph>) {
        (self.info, self.glyphs)
    }
}

impl<'a> IntoIterator for &'a GlyphSet {
    type Item = &'a Glyph;
    type IntoIter = core::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

/// Turns stroke outlines into spaced glyphs in font units.
#[derive(Clone, Debug)]
pub struct GlyphAssembler {
    metrics: FontMetricsContext,
    arc_policy: ArcPolicy,
    arc_tolerance: f64,
    family_name: String,
    style_name: String,
}

impl GlyphAssembler {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            metrics: config.metrics()?,
            arc_policy: config.arc_policy,
            arc_tolerance: config.arc_tolerance,
            family_name: config.family_name.clone(),
            style_name: config.style_name.clone(),
        })
    }

    pub fn metrics(&self) -> &FontMetricsContext {
        &self.metrics
    }

    /// Font-wide values for this configuration.
    pub fn font_info(&self) -> FontInfo {
        FontInfo {
            family_name: self.family_name.clone(),
            style_name: self.style_name.clone(),
            units_per_em: self.metrics.units_per_em(),
            ascender: self.metrics.ascender(),
            descender: self.metrics.descender(),
        }
    }

    /// Side bearing applied to both sides of every drawn glyph.
    pub fn side_bearing(&self) -> f64 {
        self.metrics.units_per_em() as f64 * SIDE_BEARING_RATIO
    }

    /// Assembles every character of a sketch.
    ///
    /// Characters without any ink are left out of the set.
    pub fn assemble(&self, sketch: &Sketch) -> Result<GlyphSet, AssembleError> {
        let mut glyphs = Vec::with_capacity(sketch.len() + 1);
        glyphs.push(Glyph::notdef());
        for (&character, strokes) in &sketch.strokes {
            let outline = Outline::combine(strokes.iter().map(|path| Outline::from_path(path)));
            match self.assemble_glyph(character, outline)? {
                Some(glyph) => glyphs.push(glyph),
                None => log::warn!(
                    "'{}' has no ink, leaving it out",
                    character.escape_default()
                ),
            }
        }
        Ok(GlyphSet {
            info: self.font_info(),
            glyphs,
        })
    }

    /// Assembles a single glyph from the combined outline of its strokes,
    /// given in canvas pixels.
    ///
    /// Returns `None` if the outline is empty.
    pub fn assemble_glyph(
        &self,
        character: char,
        outline: Outline,
    ) -> Result<Option<Glyph>, AssembleError> {
        let outline = match self.arc_policy {
            _ if !outline.has_arcs() => outline,
            ArcPolicy::Convert => convert_arcs(&outline, self.arc_tolerance),
            ArcPolicy::Preserve => {
                log::warn!(
                    "'{}' keeps elliptical arcs; their radii are not scaled to font units",
                    character.escape_default()
                );
                outline
            }
            ArcPolicy::Reject => return Err(AssembleError::UnsupportedArc(character)),
        };
        let Some(bbox) = outline.bounding_box() else {
            return Ok(None);
        };
        let scale = self.metrics.scale();
        let side_bearing = self.side_bearing();
        let advance_width = bbox.width() * scale + 2.0 * side_bearing;
        let horizontal_offset = advance_width / 2.0 - bbox.center() * scale;
        let outline = self.metrics.map_outline(&outline, horizontal_offset);
        log::trace!(
            "assembled '{}': {} commands, advance {advance_width:.2}",
            character.escape_default(),
            outline.len()
        );
        Ok(Some(Glyph {
            name: glyph_name(character),
            codepoint: Some(character),
            outline,
            advance_width,
            left_side_bearing: side_bearing,
        }))
    }
}

/// Production name for the glyph of a character.
///
/// ASCII letters and digits name themselves; everything else uses the
/// `uniXXXX` form, or `uXXXXX` outside the basic multilingual plane.
pub fn glyph_name(character: char) -> String {
    match character as u32 {
        _ if character.is_ascii_alphanumeric() => character.to_string(),
        cp @ 0..=0xFFFF => format!("uni{cp:04X}"),
        cp => format!("u{cp:05X}"),
    }
}
