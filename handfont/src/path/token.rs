//! Splitting path data into command tokens.

use core::fmt;

/// The drawing operation named by a path command letter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PathVerb {
    /// `M`: begin a new subpath.
    MoveTo,
    /// `L`: straight line.
    LineTo,
    /// `H`: horizontal line.
    HorizontalTo,
    /// `V`: vertical line.
    VerticalTo,
    /// `C`: cubic bezier with two explicit control points.
    CurveTo,
    /// `S`: cubic bezier whose first control point is implied.
    SmoothCurveTo,
    /// `Q`: quadratic bezier.
    QuadTo,
    /// `T`: quadratic bezier whose control point is implied.
    SmoothQuadTo,
    /// `A`: elliptical arc.
    ArcTo,
    /// `Z`: close the current subpath.
    Close,
}

impl PathVerb {
    /// Returns the verb for a command letter along with whether the command
    /// uses relative coordinates.
    pub fn from_letter(letter: u8) -> Option<(Self, bool)> {
        let verb = match letter.to_ascii_uppercase() {
            b'M' => Self::MoveTo,
            b'L' => Self::LineTo,
            b'H' => Self::HorizontalTo,
            b'V' => Self::VerticalTo,
            b'C' => Self::CurveTo,
            b'S' => Self::SmoothCurveTo,
            b'Q' => Self::QuadTo,
            b'T' => Self::SmoothQuadTo,
            b'A' => Self::ArcTo,
            b'Z' => Self::Close,
            _ => return None,
        };
        Some((verb, letter.is_ascii_lowercase()))
    }

    /// The canonical (absolute) command letter.
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalTo => 'H',
            Self::VerticalTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadTo => 'Q',
            Self::SmoothQuadTo => 'T',
            Self::ArcTo => 'A',
            Self::Close => 'Z',
        }
    }

    /// Number of arguments consumed by a single instance of this command.
    pub fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo | Self::SmoothQuadTo => 2,
            Self::HorizontalTo | Self::VerticalTo => 1,
            Self::CurveTo => 6,
            Self::SmoothCurveTo | Self::QuadTo => 4,
            Self::ArcTo => 7,
            Self::Close => 0,
        }
    }
}

impl fmt::Display for PathVerb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single command with exactly one group of arguments.
#[derive(Clone, PartialEq, Debug)]
pub struct RawPathToken {
    /// The operation to perform.
    pub verb: PathVerb,
    /// True if the command letter was lowercase.
    pub relative: bool,
    /// Arguments, exactly [`PathVerb::arity`] of them.
    pub args: Vec<f64>,
}

impl RawPathToken {
    /// Creates a new token.
    pub fn new(verb: PathVerb, relative: bool, args: impl Into<Vec<f64>>) -> Self {
        Self {
            verb,
            relative,
            args: args.into(),
        }
    }
}

/// Splits path data into a flat sequence of tokens.
///
/// Repeated argument groups following a single command letter produce one
/// token per group. Extra groups following a moveto are lineto commands.
///
/// Parsing is best effort: groups that are short or contain something other
/// than a number are skipped and the remainder of the path is still
/// processed.
pub fn tokenize(path: &str) -> Vec<RawPathToken> {
    let mut tokens = Vec::new();
    let bytes = path.as_bytes();
    let mut pos = 0;
    // leading junk before the first command letter
    while pos < bytes.len() && PathVerb::from_letter(bytes[pos]).is_none() {
        pos += 1;
    }
    if pos > 0 && !path[..pos].trim().is_empty() {
        log::debug!("dropping leading path data '{}'", &path[..pos].trim());
    }
    while pos < bytes.len() {
        // invariant: bytes[pos] is a command letter
        let Some((verb, relative)) = PathVerb::from_letter(bytes[pos]) else {
            break;
        };
        let args_start = pos + 1;
        let mut args_end = args_start;
        while args_end < bytes.len() && PathVerb::from_letter(bytes[args_end]).is_none() {
            args_end += 1;
        }
        push_command(verb, relative, &path[args_start..args_end], &mut tokens);
        pos = args_end;
    }
    tokens
}

fn push_command(verb: PathVerb, relative: bool, args: &str, tokens: &mut Vec<RawPathToken>) {
    let fields: Vec<Option<f64>> = Numbers::new(args).collect();
    let arity = verb.arity();
    if arity == 0 {
        if !fields.is_empty() {
            log::debug!("ignoring {} argument(s) to '{verb}'", fields.len());
        }
        tokens.push(RawPathToken::new(verb, relative, Vec::new()));
        return;
    }
    for (i, group) in fields.chunks(arity).enumerate() {
        let values: Option<Vec<f64>> = group.iter().copied().collect();
        match values {
            Some(values) if values.len() == arity => {
                // subsequent pairs after a moveto are implicit linetos
                let verb = if verb == PathVerb::MoveTo && i > 0 {
                    PathVerb::LineTo
                } else {
                    verb
                };
                tokens.push(RawPathToken::new(verb, relative, values));
            }
            _ => log::debug!(
                "dropping malformed argument group {i} for '{verb}': expected {arity} numbers"
            ),
        }
    }
}

/// Iterator over the numeric fields in the argument text of one command.
///
/// Yields `None` for a field that is not a valid number.
struct Numbers<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Numbers<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn is_separator(byte: u8) -> bool {
        byte == b',' || byte.is_ascii_whitespace()
    }

    /// Returns the end of the number starting at `start`, or `None` if no
    /// number starts there.
    fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
        let mut pos = start;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let int_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        let mut has_digits = pos > int_start;
        if bytes.get(pos) == Some(&b'.') {
            let frac_start = pos + 1;
            let mut frac_end = frac_start;
            while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
                frac_end += 1;
            }
            if frac_end > frac_start || has_digits {
                has_digits = true;
                pos = frac_end;
            }
        }
        if !has_digits {
            return None;
        }
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp = pos + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let digits_start = exp;
            while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
                exp += 1;
            }
            if exp > digits_start {
                pos = exp;
            }
        }
        Some(pos)
    }
}

impl Iterator for Numbers<'_> {
    type Item = Option<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && Self::is_separator(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        match Self::scan_number(bytes, start) {
            Some(end) => {
                self.pos = end;
                // out of range values parse as infinity
                Some(
                    self.text[start..end]
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite()),
                )
            }
            None => {
                // skip the junk field; a sign begins a new field
                self.pos += 1;
                while self.pos < bytes.len()
                    && !Self::is_separator(bytes[self.pos])
                    && !matches!(bytes[self.pos], b'+' | b'-')
                {
                    self.pos += 1;
                }
                Some(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(text: &str) -> Vec<Option<f64>> {
        Numbers::new(text).collect()
    }

    #[test]
    fn implicit_repetition() {
        assert_eq!(
            tokenize("L 10 20 30 40"),
            vec![
                RawPathToken::new(PathVerb::LineTo, false, [10.0, 20.0]),
                RawPathToken::new(PathVerb::LineTo, false, [30.0, 40.0]),
            ]
        );
    }

    #[test]
    fn arities() {
        let tokens = tokenize("M0 0 H5 V6 C1 2 3 4 5 6 S1 2 3 4 Q1 2 3 4 T9 9 A5 5 0 1 0 9 9 Z");
        let summary: Vec<_> = tokens.iter().map(|t| (t.verb, t.args.len())).collect();
        assert_eq!(
            summary,
            vec![
                (PathVerb::MoveTo, 2),
                (PathVerb::HorizontalTo, 1),
                (PathVerb::VerticalTo, 1),
                (PathVerb::CurveTo, 6),
                (PathVerb::SmoothCurveTo, 4),
                (PathVerb::QuadTo, 4),
                (PathVerb::SmoothQuadTo, 2),
                (PathVerb::ArcTo, 7),
                (PathVerb::Close, 0),
            ]
        );
    }

    #[test]
    fn relative_flag_follows_case() {
        let tokens = tokenize("m1,1 l2,2 Z z");
        let flags: Vec<_> = tokens.iter().map(|t| t.relative).collect();
        assert_eq!(flags, vec![true, true, false, true]);
    }

    #[test]
    fn extra_moveto_pairs_are_linetos() {
        assert_eq!(
            tokenize("m 1 2 3 4 5 6"),
            vec![
                RawPathToken::new(PathVerb::MoveTo, true, [1.0, 2.0]),
                RawPathToken::new(PathVerb::LineTo, true, [3.0, 4.0]),
                RawPathToken::new(PathVerb::LineTo, true, [5.0, 6.0]),
            ]
        );
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(
            numbers("10-20 .5.5 -1e2,+3E-1 7."),
            vec![
                Some(10.0),
                Some(-20.0),
                Some(0.5),
                Some(0.5),
                Some(-100.0),
                Some(0.3),
                Some(7.0)
            ]
        );
    }

    #[test]
    fn whitespace_and_commas() {
        assert_eq!(
            tokenize("M100,200\n\tL 1 , 2"),
            vec![
                RawPathToken::new(PathVerb::MoveTo, false, [100.0, 200.0]),
                RawPathToken::new(PathVerb::LineTo, false, [1.0, 2.0]),
            ]
        );
    }

    #[test]
    fn short_group_is_dropped() {
        assert_eq!(
            tokenize("L 1 2 3"),
            vec![RawPathToken::new(PathVerb::LineTo, false, [1.0, 2.0])]
        );
        assert!(tokenize("C 1 2 3 4 5").is_empty());
    }

    #[test]
    fn non_numeric_group_is_dropped() {
        assert_eq!(
            tokenize("L 1 ?? 3 4 5 6"),
            vec![
                RawPathToken::new(PathVerb::LineTo, false, [3.0, 4.0]),
                RawPathToken::new(PathVerb::LineTo, false, [5.0, 6.0]),
            ]
        );
        assert_eq!(numbers("1 x -2"), vec![Some(1.0), None, Some(-2.0)]);
    }

    #[test]
    fn out_of_range_number_drops_its_group() {
        assert_eq!(
            tokenize("L 1e999 2 3 4"),
            vec![RawPathToken::new(PathVerb::LineTo, false, [3.0, 4.0])]
        );
        assert_eq!(numbers("-1e400 5e-400"), vec![None, Some(0.0)]);
    }

    #[test]
    fn close_ignores_arguments() {
        assert_eq!(
            tokenize("Z 1 2"),
            vec![RawPathToken::new(PathVerb::Close, false, Vec::new())]
        );
    }

    #[test]
    fn leading_junk_and_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert_eq!(
            tokenize("12 M 1 1"),
            vec![RawPathToken::new(PathVerb::MoveTo, false, [1.0, 1.0])]
        );
    }

    #[test]
    fn command_without_arguments_yields_nothing() {
        assert!(tokenize("L").is_empty());
    }
}
