//! Conversion of elliptical arcs to cubic bezier curves.

use handfont_types::Point;
use kurbo::{PathEl, SvgArc, Vec2};

use crate::{command::DrawCommand, outline::Outline, path::elevate_quadratic};

/// Returns a copy of `outline` with every arc replaced by cubic curves.
///
/// `tolerance` is the maximum distance, in the outline's units, between the
/// arc and its approximation. An arc with a zero radius becomes a line and an
/// arc whose endpoints coincide is dropped.
pub fn convert_arcs(outline: &Outline, tolerance: f64) -> Outline {
    let mut commands = Vec::with_capacity(outline.len());
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    for command in outline.commands() {
        match *command {
            DrawCommand::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let arc = SvgArc {
                    from: to_kurbo(current),
                    to: kurbo::Point::new(x, y),
                    radii: Vec2::new(rx, ry),
                    x_rotation: x_rotation.to_radians(),
                    large_arc,
                    sweep,
                };
                append_arc(&arc, tolerance, &mut commands);
            }
            DrawCommand::MoveTo { x, y } => {
                subpath_start = Point::new(x, y);
                commands.push(*command);
            }
            other => commands.push(other),
        }
        current = command.end_point().unwrap_or(subpath_start);
    }
    Outline::new(commands)
}

fn append_arc(arc: &SvgArc, tolerance: f64, out: &mut Vec<DrawCommand>) {
    let end = Point::new(arc.to.x, arc.to.y);
    let Some(ellipse_arc) = kurbo::Arc::from_svg_arc(arc) else {
        if arc.from != arc.to {
            out.push(DrawCommand::line_to(end));
        }
        return;
    };
    let first = out.len();
    let mut current = Point::new(arc.from.x, arc.from.y);
    for el in ellipse_arc.append_iter(tolerance) {
        let command = match el {
            PathEl::CurveTo(c0, c1, p) => {
                DrawCommand::curve_to(from_kurbo(c0), from_kurbo(c1), from_kurbo(p))
            }
            PathEl::QuadTo(q, p) => {
                let (c0, c1) = elevate_quadratic(current, from_kurbo(q), from_kurbo(p));
                DrawCommand::curve_to(c0, c1, from_kurbo(p))
            }
            PathEl::LineTo(p) => DrawCommand::line_to(from_kurbo(p)),
            PathEl::MoveTo(_) | PathEl::ClosePath => continue,
        };
        current = command.end_point().unwrap_or(current);
        out.push(command);
    }
    // pin the endpoint so later closes and relative math stay exact
    if out.len() > first {
        if let Some(last) = out.last_mut() {
            *last = pin_end_point(*last, end);
        }
    }
}

fn pin_end_point(command: DrawCommand, end: Point<f64>) -> DrawCommand {
    match command {
        DrawCommand::CurveTo {
            cx0, cy0, cx1, cy1, ..
        } => DrawCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x: end.x,
            y: end.y,
        },
        DrawCommand::LineTo { .. } => DrawCommand::line_to(end),
        other => other,
    }
}

fn to_kurbo(p: Point<f64>) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

fn from_kurbo(p: kurbo::Point) -> Point<f64> {
    Point::new(p.x, p.y)
}
