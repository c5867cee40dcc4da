//! Canonical normalized color

use serde::Serialize;

/// Light or dark interface appearance, used to pick a side of a two-mode color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppearanceMode {
    Light,
    Dark,
}

/// A color in sRGB with every channel normalized to `0.0..=1.0`.
///
/// Channels are clamped on construction whatever encoding they came from.
/// `raw_text` keeps the original expression for display and never takes part
/// in equality: two colors are equal when their [`hex`](Self::hex) strings are.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl NormalizedColor {
    /// Creates a color from fractional channels, clamping each into range.
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
            raw_text: None,
        }
    }

    /// Creates a gray color with the same value in every channel.
    pub fn gray(white: f32, alpha: f32) -> Self {
        Self::rgba(white, white, white, alpha)
    }

    /// Attaches the source expression this color was built from.
    pub fn with_raw_text(mut self, raw: impl Into<String>) -> Self {
        self.raw_text = Some(raw.into());
        self
    }

    /// Returns the `#RRGGBB A.AA` projection of this color.
    ///
    /// Channels are truncated to 8 bits; alpha is printed with two decimals.
    /// This string is the color's identity.
    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X} {:.2}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            self.alpha
        )
    }

    /// Returns the `RRGGBB` digits of this color without alpha.
    pub fn rgb_digits(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }
}

impl PartialEq for NormalizedColor {
    fn eq(&self, other: &Self) -> bool {
        self.hex() == other.hex()
    }
}

impl Eq for NormalizedColor {}

fn unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

fn to_byte(channel: f32) -> u8 {
    (unit(channel) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        let color = NormalizedColor::rgba(1.4, -0.2, f32::NAN, 2.0);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert_eq!(color.blue, 0.0);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_hex_truncates_channels() {
        assert_eq!(NormalizedColor::rgba(1.0, 0.0, 0.0, 1.0).hex(), "#FF0000 1.00");
        assert_eq!(NormalizedColor::rgba(0.5, 0.5, 0.5, 0.5).hex(), "#7F7F7F 0.50");
        assert_eq!(NormalizedColor::gray(1.0, 0.25).hex(), "#FFFFFF 0.25");
    }

    #[test]
    fn test_equality_ignores_raw_text_and_sub_byte_noise() {
        let a = NormalizedColor::rgba(1.0, 0.0, 0.0, 1.0).with_raw_text("UIColor.red");
        let b = NormalizedColor::rgba(1.0, 0.0, 0.001, 1.0);
        let c = NormalizedColor::rgba(1.0, 0.0, 0.004, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
