//! Raw asset color samples

use serde::Deserialize;

/// Color space an asset sample is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ColorSpace {
    #[serde(rename = "srgb")]
    Srgb,
    #[serde(rename = "extended-srgb")]
    ExtendedSrgb,
    #[serde(rename = "extended-linear-srgb")]
    ExtendedLinearSrgb,
    #[serde(rename = "display-p3")]
    DisplayP3,
    #[serde(rename = "gray-gamma-22")]
    GrayGamma22,
    #[serde(rename = "extended-gray")]
    ExtendedGray,
}

impl ColorSpace {
    /// Returns the asset-catalog name of this color space.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::ExtendedSrgb => "extended-srgb",
            Self::ExtendedLinearSrgb => "extended-linear-srgb",
            Self::DisplayP3 => "display-p3",
            Self::GrayGamma22 => "gray-gamma-22",
            Self::ExtendedGray => "extended-gray",
        }
    }

    /// Returns `true` for spaces whose samples carry a single white channel.
    pub fn is_gray(&self) -> bool {
        matches!(self, Self::GrayGamma22 | Self::ExtendedGray)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel text of a sample, exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SampleComponents {
    Gray {
        white: String,
        alpha: String,
    },
    Rgb {
        red: String,
        green: String,
        blue: String,
        alpha: String,
    },
}

impl SampleComponents {
    /// Gray components.
    pub fn gray(white: impl Into<String>, alpha: impl Into<String>) -> Self {
        Self::Gray {
            white: white.into(),
            alpha: alpha.into(),
        }
    }

    /// RGB components.
    pub fn rgb(
        red: impl Into<String>,
        green: impl Into<String>,
        blue: impl Into<String>,
        alpha: impl Into<String>,
    ) -> Self {
        Self::Rgb {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
            alpha: alpha.into(),
        }
    }
}

impl std::fmt::Display for SampleComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray { white, alpha } => write!(f, "gray(white: {white}, alpha: {alpha})"),
            Self::Rgb {
                red,
                green,
                blue,
                alpha,
            } => write!(f, "rgb(red: {red}, green: {green}, blue: {blue}, alpha: {alpha})"),
        }
    }
}

/// One declared color sample of an asset entry.
///
/// Deserializes from the asset-catalog shape:
///
/// ```json
/// { "color-space": "display-p3",
///   "components": { "red": "1.000", "green": "0.200", "blue": "0.100", "alpha": "1.000" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetColorSample {
    #[serde(rename = "color-space")]
    pub color_space: ColorSpace,
    pub components: SampleComponents,
}

impl AssetColorSample {
    /// Creates a sample.
    pub fn new(color_space: ColorSpace, components: SampleComponents) -> Self {
        Self {
            color_space,
            components,
        }
    }

    /// Returns the debug description kept as a normalized color's raw text.
    pub fn describe(&self) -> String {
        format!("{} {}", self.color_space, self.components)
    }
}
