//! Turns raw token values into CSS value text.

use serde_json::{Number, Value};

/// Unit appended to numeric and dimension tokens.
pub const LENGTH_UNIT: &str = "px";

/// Declared `type` of a variable definition, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Number,
    Color,
    Dimension,
    Other,
}

impl TokenType {
    /// Parses a type tag. An empty tag counts as no tag at all.
    pub fn from_tag(tag: &str) -> Option<TokenType> {
        if tag.is_empty() {
            return None;
        }
        Some(match tag.to_lowercase().as_str() {
            "number" => TokenType::Number,
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            _ => TokenType::Other,
        })
    }
}

/// Formats `value` according to its declared type. Never fails; odd input
/// gives odd but deterministic output (`"abc"` typed as a number becomes
/// `"abcpx"`).
pub fn format_value(value: &Value, type_: Option<TokenType>) -> String {
    match type_ {
        None => match value {
            Value::Number(n) => format!("{}{LENGTH_UNIT}", number_text(n)),
            other => value_text(other),
        },
        Some(TokenType::Number | TokenType::Dimension) => {
            format!("{}{LENGTH_UNIT}", value_text(value))
        }
        Some(TokenType::Color) => {
            let text = value_text(value);
            if text.starts_with('#') {
                text
            } else {
                format!("#{text}")
            }
        }
        Some(TokenType::Other) => value_text(value),
    }
}

/// Plain text of a raw value: strings unquoted, numbers without a
/// redundant fraction, anything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Integral floats print without a fraction (`8.0` -> `8`); magnitudes
/// from `1e21` up or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && (f.abs() >= 1e21 || f.abs() < 1e-6) => exponent_text(f),
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_text(f: f64) -> String {
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
