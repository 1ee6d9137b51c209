//! The JSON sketch file format.

use handfont::{Config, Sketch};
use serde::Deserialize;

/// A sketch with the configuration used to assemble it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SketchFile {
    #[serde(default)]
    pub config: Config,
    pub glyphs: Vec<GlyphEntry>,
}

/// The strokes drawn for one character.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphEntry {
    pub character: char,
    #[serde(default)]
    pub strokes: Vec<String>,
}

impl SketchFile {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Collects the entries into a sketch, keeping their order.
    ///
    /// Entries repeating a character add to its strokes.
    pub fn sketch(&self) -> Sketch {
        let mut sketch = Sketch::new();
        for entry in &self.glyphs {
            sketch.add_character(entry.character);
            for stroke in &entry.strokes {
                sketch.add_stroke(entry.character, stroke.as_str());
            }
        }
        log::debug!("read {} characters", sketch.len());
        sketch
    }
}
