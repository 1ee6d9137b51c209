//! Resolution of path tokens into absolute drawing commands.

use handfont_types::Point;

use super::token::{PathVerb, RawPathToken};
use crate::{command::DrawCommand, outline::Outline};

/// Running state of a single normalization pass.
///
/// Each token is interpreted relative to the state left by the tokens before
/// it; [`apply`](Self::apply) advances the state by exactly one token.
#[derive(Clone, Debug, Default)]
pub struct NormalizerState {
    /// Where the pen currently rests.
    pub current: Point<f64>,
    /// Start of the current subpath; the target of a close.
    pub subpath_start: Point<f64>,
    /// Control point available for reflection by a following smooth curve.
    ///
    /// For quadratic commands this is the quadratic control point, not one
    /// of the elevated cubic control points.
    pub last_control: Option<Point<f64>>,
    /// The verb of the previous token, before any conversion.
    pub last_verb: Option<PathVerb>,
    subpath_open: bool,
}

impl NormalizerState {
    /// Processes one token, appending the resulting commands to `out`.
    ///
    /// Usually a single command is produced. A drawing command that arrives
    /// when no subpath is open is preceded by an implicit moveto at the
    /// current point, and a close without an open subpath produces nothing.
    pub fn apply(&mut self, token: &RawPathToken, out: &mut Vec<DrawCommand>) {
        let verb = token.verb;
        if token.args.len() != verb.arity() {
            log::debug!(
                "skipping '{verb}' with {} arguments, expected {}",
                token.args.len(),
                verb.arity()
            );
            return;
        }
        let args = &token.args;
        if !matches!(verb, PathVerb::MoveTo | PathVerb::Close) && !self.subpath_open {
            self.subpath_start = self.current;
            self.subpath_open = true;
            out.push(DrawCommand::move_to(self.current));
        }
        match verb {
            PathVerb::MoveTo => {
                let p = self.resolve(token, 0);
                self.subpath_start = p;
                self.current = p;
                self.subpath_open = true;
                self.last_control = None;
                out.push(DrawCommand::move_to(p));
            }
            PathVerb::LineTo => {
                let p = self.resolve(token, 0);
                self.line_to(p, out);
            }
            PathVerb::HorizontalTo => {
                let x = if token.relative {
                    self.current.x + args[0]
                } else {
                    args[0]
                };
                self.line_to(Point::new(x, self.current.y), out);
            }
            PathVerb::VerticalTo => {
                let y = if token.relative {
                    self.current.y + args[0]
                } else {
                    args[0]
                };
                self.line_to(Point::new(self.current.x, y), out);
            }
            PathVerb::CurveTo => {
                let c0 = self.resolve(token, 0);
                let c1 = self.resolve(token, 2);
                let p = self.resolve(token, 4);
                self.cubic_to(c0, c1, p, out);
            }
            PathVerb::SmoothCurveTo => {
                let c0 = self.reflected_control(&[PathVerb::CurveTo, PathVerb::SmoothCurveTo]);
                let c1 = self.resolve(token, 0);
                let p = self.resolve(token, 2);
                self.cubic_to(c0, c1, p, out);
            }
            PathVerb::QuadTo => {
                let q = self.resolve(token, 0);
                let p = self.resolve(token, 2);
                self.quad_to(q, p, out);
            }
            PathVerb::SmoothQuadTo => {
                let q = self.reflected_control(&[PathVerb::QuadTo, PathVerb::SmoothQuadTo]);
                let p = self.resolve(token, 0);
                self.quad_to(q, p, out);
            }
            PathVerb::ArcTo => {
                let p = self.resolve(token, 5);
                out.push(DrawCommand::ArcTo {
                    rx: args[0],
                    ry: args[1],
                    x_rotation: args[2],
                    large_arc: args[3] != 0.0,
                    sweep: args[4] != 0.0,
                    x: p.x,
                    y: p.y,
                });
                self.current = p;
                self.last_control = None;
            }
            PathVerb::Close => {
                if self.subpath_open {
                    out.push(DrawCommand::Close);
                    self.subpath_open = false;
                } else {
                    log::debug!("skipping close with no open subpath");
                }
                self.current = self.subpath_start;
                self.last_control = None;
            }
        }
        self.last_verb = Some(verb);
    }

    /// Reads the coordinate pair at `index`, made absolute.
    fn resolve(&self, token: &RawPathToken, index: usize) -> Point<f64> {
        let p = Point::new(token.args[index], token.args[index + 1]);
        if token.relative {
            p + self.current
        } else {
            p
        }
    }

    fn reflected_control(&self, after: &[PathVerb]) -> Point<f64> {
        match (self.last_control, self.last_verb) {
            (Some(control), Some(verb)) if after.contains(&verb) => self.current.reflect(control),
            _ => self.current,
        }
    }

    fn line_to(&mut self, p: Point<f64>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::line_to(p));
        self.current = p;
        self.last_control = None;
    }

    fn cubic_to(
        &mut self,
        c0: Point<f64>,
        c1: Point<f64>,
        p: Point<f64>,
        out: &mut Vec<DrawCommand>,
    ) {
        out.push(DrawCommand::curve_to(c0, c1, p));
        self.current = p;
        self.last_control = Some(c1);
    }

    fn quad_to(&mut self, q: Point<f64>, p: Point<f64>, out: &mut Vec<DrawCommand>) {
        let (c0, c1) = elevate_quadratic(self.current, q, p);
        out.push(DrawCommand::curve_to(c0, c1, p));
        self.current = p;
        self.last_control = Some(q);
    }
}

/// Computes the control points of the cubic bezier that traces exactly the
/// same curve as the quadratic from `start` through `control` to `end`.
pub fn elevate_quadratic(
    start: Point<f64>,
    control: Point<f64>,
    end: Point<f64>,
) -> (Point<f64>, Point<f64>) {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    (
        start.lerp(control, TWO_THIRDS),
        end.lerp(control, TWO_THIRDS),
    )
}

/// Converts a token sequence into an outline of absolute commands, starting
/// from the origin.
pub fn normalize(tokens: &[RawPathToken]) -> Outline {
    let (_, commands) = tokens.iter().fold(
        (NormalizerState::default(), Vec::with_capacity(tokens.len())),
        |(mut state, mut out), token| {
            state.apply(token, &mut out);
            (state, out)
        },
    );
    Outline::new(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::tokenize;
    use pretty_assertions::assert_eq;

    fn commands(path: &str) -> Vec<DrawCommand> {
        normalize(&tokenize(path)).commands().to_vec()
    }

    fn assert_close(actual: Point<f64>, expected: Point<f64>) {
        assert!(
            (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    fn control_points(command: &DrawCommand) -> (Point<f64>, Point<f64>) {
        match *command {
            DrawCommand::CurveTo {
                cx0, cy0, cx1, cy1, ..
            } => (Point::new(cx0, cy0), Point::new(cx1, cy1)),
            other => panic!("expected a curve, found {other:?}"),
        }
    }

    #[test]
    fn quadratic_degree_elevation() {
        let (c0, c1) = elevate_quadratic(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        );
        assert_close(c0, Point::new(6.667, 6.667));
        assert_close(c1, Point::new(13.333, 6.667));

        let out = commands("M0,0 Q10,10 20,0");
        let (c0, c1) = control_points(&out[1]);
        assert_close(c0, Point::new(6.667, 6.667));
        assert_close(c1, Point::new(13.333, 6.667));
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let out = commands("M0,0 C0,0 10,0 10,10 S10,20 20,20");
        let (c0, c1) = control_points(&out[2]);
        // 2 * (10, 10) - (10, 0)
        assert_eq!(c0, Point::new(10.0, 20.0));
        assert_eq!(c1, Point::new(10.0, 20.0));
        assert_eq!(out[2].end_point(), Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn smooth_cubic_without_previous_curve_uses_current_point() {
        let out = commands("M0,0 L10,10 S10,20 20,20");
        let (c0, _) = control_points(&out[2]);
        assert_eq!(c0, Point::new(10.0, 10.0));
        // a quadratic does not count as a previous cubic
        let out = commands("M0,0 Q5,5 10,10 S10,20 20,20");
        let (c0, _) = control_points(&out[2]);
        assert_eq!(c0, Point::new(10.0, 10.0));
    }

    #[test]
    fn smooth_quadratic_reflects_quadratic_control() {
        // reflected control: 2 * (20, 0) - (10, 10) = (30, -10)
        let out = commands("M0,0 Q10,10 20,0 T40,0");
        let (expected0, expected1) = elevate_quadratic(
            Point::new(20.0, 0.0),
            Point::new(30.0, -10.0),
            Point::new(40.0, 0.0),
        );
        let (c0, c1) = control_points(&out[2]);
        assert_close(c0, expected0);
        assert_close(c1, expected1);
    }

    #[test]
    fn smooth_quadratic_after_cubic_is_a_straight_curve() {
        let out = commands("M0,0 C0,5 5,10 10,10 T20,10");
        let (c0, c1) = control_points(&out[2]);
        assert_close(c0, Point::new(10.0, 10.0));
        assert_close(c1, Point::new(20.0, 10.0).lerp(Point::new(10.0, 10.0), 2.0 / 3.0));
    }

    #[test]
    fn chained_smooth_quadratics() {
        let out = commands("M0,0 Q10,10 20,0 T40,0 T60,0");
        // second T reflects the first T's control (30, -10) through (40, 0)
        let (expected0, _) = elevate_quadratic(
            Point::new(40.0, 0.0),
            Point::new(50.0, 10.0),
            Point::new(60.0, 0.0),
        );
        let (c0, _) = control_points(&out[3]);
        assert_close(c0, expected0);
    }

    #[test]
    fn relative_commands() {
        assert_eq!(
            commands("m10,10 l5,0 h5 v-5 c1,1 2,2 3,3"),
            vec![
                DrawCommand::MoveTo { x: 10.0, y: 10.0 },
                DrawCommand::LineTo { x: 15.0, y: 10.0 },
                DrawCommand::LineTo { x: 20.0, y: 10.0 },
                DrawCommand::LineTo { x: 20.0, y: 5.0 },
                DrawCommand::CurveTo {
                    cx0: 21.0,
                    cy0: 6.0,
                    cx1: 22.0,
                    cy1: 7.0,
                    x: 23.0,
                    y: 8.0
                },
            ]
        );
    }

    #[test]
    fn horizontal_and_vertical_keep_other_axis() {
        assert_eq!(
            commands("M3,4 H10 V20"),
            vec![
                DrawCommand::MoveTo { x: 3.0, y: 4.0 },
                DrawCommand::LineTo { x: 10.0, y: 4.0 },
                DrawCommand::LineTo { x: 10.0, y: 20.0 },
            ]
        );
    }

    #[test]
    fn arc_passes_through_with_absolute_endpoint() {
        assert_eq!(
            commands("M10,10 a5,6 30 1 0 10,0"),
            vec![
                DrawCommand::MoveTo { x: 10.0, y: 10.0 },
                DrawCommand::ArcTo {
                    rx: 5.0,
                    ry: 6.0,
                    x_rotation: 30.0,
                    large_arc: true,
                    sweep: false,
                    x: 20.0,
                    y: 10.0
                },
            ]
        );
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let out = commands("M10,10 L20,10 L20,20 z l5,5");
        assert_eq!(out[3], DrawCommand::Close);
        // implicit moveto at the start of the closed subpath
        assert_eq!(out[4], DrawCommand::MoveTo { x: 10.0, y: 10.0 });
        assert_eq!(out[5], DrawCommand::LineTo { x: 15.0, y: 15.0 });
    }

    #[test]
    fn every_closed_subpath_returns_to_its_moveto() {
        let tokens =
            tokenize("M0,0 L10,0 L10,10 Z M20,20 q5,5 10,0 t10,0 Z m5,5 c1,1 2,2 3,3 s4,4 5,5 z");
        let mut state = NormalizerState::default();
        let mut out = Vec::new();
        for token in &tokens {
            state.apply(token, &mut out);
            if token.verb == PathVerb::Close {
                let last_move = out.iter().rev().find_map(|command| match *command {
                    DrawCommand::MoveTo { x, y } => Some(Point::new(x, y)),
                    _ => None,
                });
                assert_eq!(Some(state.current), last_move);
            }
        }
        assert_eq!(Outline::new(out).subpaths().count(), 3);
    }

    #[test]
    fn missing_initial_moveto_is_implied() {
        assert_eq!(
            commands("L10,10"),
            vec![
                DrawCommand::MoveTo { x: 0.0, y: 0.0 },
                DrawCommand::LineTo { x: 10.0, y: 10.0 },
            ]
        );
    }

    #[test]
    fn stray_close_is_dropped() {
        assert!(commands("Z").is_empty());
        assert_eq!(
            commands("M1,1 Z Z"),
            vec![DrawCommand::MoveTo { x: 1.0, y: 1.0 }, DrawCommand::Close]
        );
    }

    #[test]
    fn wrong_arity_token_is_skipped() {
        let tokens = [
            RawPathToken::new(PathVerb::MoveTo, false, [1.0, 2.0]),
            RawPathToken::new(PathVerb::LineTo, false, [3.0]),
        ];
        assert_eq!(
            normalize(&tokens).commands(),
            &[DrawCommand::MoveTo { x: 1.0, y: 2.0 }]
        );
    }
}
