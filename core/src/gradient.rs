//! Linear-gradient strings to normalized stop and direction data.
//!
//! Only two things are read from the input: the first `<digits>deg`
//! anywhere in it, and every `#RRGGBB <signed number>%` pair. Other color
//! syntaxes (3, 4 or 8 hex digits, `rgb()`, named colors) are ignored.

use std::f64::consts::PI;

use serde::Serialize;

/// A point in the unit square, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Where a ray at `angle` degrees, clockwise from straight up, leaves
    /// the circle inscribed in the unit square.
    pub fn on_unit_circle(angle: f64) -> Point {
        let radians = angle * PI / 180.0;
        Point {
            x: 0.5 + radians.sin() / 2.0,
            y: 0.5 - radians.cos() / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub angle: f64,
    pub colors: Vec<String>,
    /// Stop positions rescaled into `[0, 1]`.
    pub locations: Vec<f64>,
    pub start: Point,
    pub end: Point,
}

peg::parser! {
  grammar gradient_parser() for str {
    rule digits() -> &'input str = $(['0'..='9']+)
    rule angle() -> &'input str = d:digits() "deg" { d }
    rule hex() = ['0'..='9' | 'a'..='f' | 'A'..='F']
    rule stop() -> (&'input str, &'input str)
        = c:$("#" hex()*<6>) " " p:$(['-' | '+' | '0'..='9' | '.']+) "%" { (c, p) }

    pub(crate) rule first_angle() -> Option<&'input str>
        = (!angle() [_])* a:angle()? [_]* { a }

    pub(crate) rule stops() -> Vec<(&'input str, &'input str)>
        = s:(x:stop() { Some(x) } / [_] { None })* { s.into_iter().flatten().collect() }
  }
}

/// Parses a gradient description. Never fails: no angle means `0`, no
/// recognizable stops means empty color and location lists.
pub fn parse_gradient(text: &str) -> Gradient {
    let angle = gradient_parser::first_angle(text)
        .ok()
        .flatten()
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(0.0);

    let mut colors = Vec::new();
    let mut raw_locations = Vec::new();
    for (color, position) in gradient_parser::stops(text).unwrap_or_default() {
        // a position like "-" or "+." has no numeric prefix; drop the stop
        let Some(percent) = leading_number(position) else {
            continue;
        };
        colors.push(color.to_string());
        raw_locations.push(percent / 100.0);
    }

    Gradient {
        angle,
        colors,
        locations: normalize_locations(&raw_locations),
        start: Point::on_unit_circle(angle),
        end: Point::on_unit_circle(angle + 180.0),
    }
}

/// Rescales locations so the smallest maps to `0` and the largest to `1`.
/// If they are all equal every location becomes `0.5`.
pub fn normalize_locations(locations: &[f64]) -> Vec<f64> {
    let min = locations.iter().copied().fold(f64::INFINITY, f64::min);
    let max = locations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        locations.iter().map(|_| 0.5).collect()
    } else {
        locations.iter().map(|loc| (loc - min) / range).collect()
    }
}

/// Longest prefix of `s` that reads as a decimal number.
fn leading_number(s: &str) -> Option<f64> {
    (1..=s.len())
        .rev()
        .filter(|&end| s.is_char_boundary(end))
        .find_map(|end| s[..end].parse::<f64>().ok())
}
