//! Outlines: the normalized drawing commands of a stroke or glyph.

use handfont_types::{BoundingBox, Point};

use crate::{
    command::DrawCommand,
    path::{normalize, tokenize},
    pen::OutlinePen,
};

/// An ordered sequence of normalized drawing commands.
///
/// A non-empty outline always begins with [`DrawCommand::MoveTo`]. An outline
/// may contain any number of subpaths, each starting with its own moveto and
/// optionally ending with a close.
///
/// Outlines are only built by parsing path data, so they serialize but do not
/// deserialize.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outline {
    commands: Vec<DrawCommand>,
}

impl Outline {
    pub(crate) fn new(commands: Vec<DrawCommand>) -> Self {
        debug_assert!(
            commands
                .first()
                .map_or(true, |first| matches!(first, DrawCommand::MoveTo { .. })),
            "outline must begin with a moveto"
        );
        Self { commands }
    }

    /// Parses and normalizes path data.
    ///
    /// Malformed portions of the path are skipped.
    pub fn from_path(path: &str) -> Self {
        normalize(&tokenize(path))
    }

    /// Concatenates the outlines of several strokes into a single outline.
    ///
    /// Each stroke keeps its own subpaths; nothing is merged or deduplicated,
    /// so overlapping strokes produce overlapping filled regions.
    pub fn combine(strokes: impl IntoIterator<Item = Outline>) -> Self {
        let commands = strokes
            .into_iter()
            .flat_map(|stroke| stroke.commands)
            .collect();
        Self { commands }
    }

    /// The commands making up this outline.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns `true` if the outline has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The number of commands in the outline.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Iterates over subpaths; each slice starts with a moveto.
    pub fn subpaths(&self) -> impl Iterator<Item = &[DrawCommand]> + '_ {
        self.commands
            .split_inclusive(|command| matches!(command, DrawCommand::Close))
            .flat_map(|chunk| {
                // a chunk may hold several unclosed subpaths
                let mut starts: Vec<usize> = chunk
                    .iter()
                    .enumerate()
                    .filter_map(|(i, command)| {
                        matches!(command, DrawCommand::MoveTo { .. }).then_some(i)
                    })
                    .collect();
                starts.push(chunk.len());
                starts
                    .windows(2)
                    .map(|w| &chunk[w[0]..w[1]])
                    .collect::<Vec<_>>()
            })
    }

    /// Returns `true` if any command is an elliptical arc.
    pub fn has_arcs(&self) -> bool {
        self.commands
            .iter()
            .any(|command| matches!(command, DrawCommand::ArcTo { .. }))
    }

    /// Horizontal extent of every on and off curve point.
    ///
    /// Returns `None` for an empty outline.
    pub fn bounding_box(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_xs(self.commands.iter().flat_map(DrawCommand::x_coords))
    }

    /// Returns a copy with `f` applied to every coordinate pair.
    pub fn map_points(&self, mut f: impl FnMut(Point<f64>) -> Point<f64>) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|command| command.map_points(&mut f))
                .collect(),
        }
    }

    /// Replays the outline into a pen.
    ///
    /// A pen has no notion of arcs, so an arc is drawn as a line to its
    /// endpoint. Convert arcs to curves beforehand to keep their shape.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        for command in &self.commands {
            match *command {
                DrawCommand::MoveTo { x, y } => pen.move_to(x, y),
                DrawCommand::LineTo { x, y } | DrawCommand::ArcTo { x, y, .. } => {
                    pen.line_to(x, y)
                }
                DrawCommand::CurveTo {
                    cx0,
                    cy0,
                    cx1,
                    cy1,
                    x,
                    y,
                } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
                DrawCommand::Close => pen.close(),
            }
        }
    }

    /// Consumes the outline, returning its commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}
