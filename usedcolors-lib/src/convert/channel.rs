//! Channel text decoding
//!
//! Asset catalogs store channel values as text in one of three encodings:
//!
//! | Text     | Meaning                                  |
//! |----------|------------------------------------------|
//! | `"0.5"`  | fraction, used as is                     |
//! | `"0xFF"` | 8-bit value, last two hex digits         |
//! | `"255"`  | 8-bit value in decimal                   |
//!
//! Decoding never fails: unparsable text decodes to `0.0`.

/// Decodes a color channel into a fraction clamped to `0.0..=1.0`.
pub fn decode_channel(text: &str) -> f32 {
    clamp_unit(decode_component(text))
}

/// Decodes a color channel without clamping.
///
/// Extended color spaces legitimately carry values outside the unit range
/// until they are converted.
pub fn decode_component(text: &str) -> f32 {
    let text = text.trim();

    if text.contains('.') {
        return parse_float(text);
    }
    if let Some(digits) = hex_digits(text) {
        return hex_pair(digits).map_or(0.0, |byte| f32::from(byte) / 255.0);
    }
    text.parse::<i64>().map_or(0.0, |value| value as f32 / 255.0)
}

/// Decodes an alpha value.
///
/// Alpha is written as a plain number (`"1"`, `"0.5"`, `"1.000"`) and is
/// never an 8-bit decimal. Hex text is still accepted.
pub fn decode_alpha(text: &str) -> f32 {
    let text = text.trim();
    match hex_digits(text) {
        Some(digits) if !text.contains('.') => {
            hex_pair(digits).map_or(0.0, |byte| f32::from(byte) / 255.0)
        }
        _ => clamp_unit(parse_float(text)),
    }
}

fn parse_float(text: &str) -> f32 {
    text.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Returns the digit part of a hexadecimal token.
///
/// A token is hexadecimal when it carries a `0x` prefix, or when it consists
/// of hex digits with at least one letter among them. Plain decimal digits
/// are not hexadecimal.
fn hex_digits(text: &str) -> Option<&str> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return Some(digits);
    }
    let all_hex = !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit());
    let has_letter = text.chars().any(|c| c.is_ascii_alphabetic());
    (all_hex && has_letter).then_some(text)
}

fn hex_pair(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let start = digits.len().saturating_sub(2);
    u8::from_str_radix(&digits[start..], 16).ok()
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
