//! Color usage events found in code and layout files

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

/// Color expressed by a layout element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutColor {
    /// Reference to an asset color by name.
    Named { name: String },
    /// Platform-named color.
    System { name: String },
    /// Gray literal with fractional channels.
    Gray {
        white: f32,
        #[serde(default = "opaque")]
        alpha: f32,
    },
    /// RGB literal with fractional channels.
    Rgb {
        red: f32,
        green: f32,
        blue: f32,
        #[serde(default = "opaque")]
        alpha: f32,
    },
}

/// One recognized color construction or reference outside the asset catalog.
///
/// Every event carries the absolute path of the file it was found in. The
/// `key` is the property the color was assigned to, when the scanner knows it.
///
/// Deserializes from an internally tagged shape:
///
/// ```json
/// { "kind": "rgb", "red": 1.0, "green": 0.5, "blue": 0.0, "path": "/app/View.swift" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UsageEvent {
    /// Asset color looked up by name, e.g. `UIColor(named: "brand")`.
    NamedAsset {
        name: String,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
    },
    /// Generated resource accessor, e.g. `R.color.brandTint`.
    GeneratedIdentifier {
        identifier: String,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
    },
    /// Platform-named color, e.g. `.systemBlue`.
    System {
        name: String,
        #[serde(default = "opaque")]
        alpha: f32,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
    },
    /// RGB literal with fractional channels.
    Rgb {
        red: f32,
        green: f32,
        blue: f32,
        #[serde(default = "opaque")]
        alpha: f32,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        raw: Option<String>,
    },
    /// Gray literal with a fractional white channel.
    Gray {
        white: f32,
        #[serde(default = "opaque")]
        alpha: f32,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        raw: Option<String>,
    },
    /// String literal that might name an asset.
    String { value: String, path: PathBuf },
    /// Interpolated string turned into a pattern that might match asset names.
    Pattern { pattern: String, path: PathBuf },
    /// Color attribute of a layout element.
    Layout {
        #[serde(default)]
        name: Option<String>,
        color: LayoutColor,
        path: PathBuf,
        #[serde(default)]
        key: Option<String>,
    },
}

impl UsageEvent {
    /// A by-name asset reference.
    pub fn named_asset(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::NamedAsset {
            name: name.into(),
            path: path.into(),
            key: None,
        }
    }

    /// A generated accessor reference.
    pub fn generated(identifier: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::GeneratedIdentifier {
            identifier: identifier.into(),
            path: path.into(),
            key: None,
        }
    }

    /// An opaque system color.
    pub fn system(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::System {
            name: name.into(),
            alpha: 1.0,
            path: path.into(),
            key: None,
        }
    }

    /// An RGB literal.
    pub fn rgb(red: f32, green: f32, blue: f32, alpha: f32, path: impl Into<PathBuf>) -> Self {
        Self::Rgb {
            red,
            green,
            blue,
            alpha,
            path: path.into(),
            key: None,
            raw: None,
        }
    }

    /// A gray literal.
    pub fn gray(white: f32, alpha: f32, path: impl Into<PathBuf>) -> Self {
        Self::Gray {
            white,
            alpha,
            path: path.into(),
            key: None,
            raw: None,
        }
    }

    /// A string literal guess.
    pub fn string(value: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::String {
            value: value.into(),
            path: path.into(),
        }
    }

    /// A pattern guess.
    pub fn pattern(pattern: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            path: path.into(),
        }
    }

    /// A layout element color.
    pub fn layout(name: Option<String>, color: LayoutColor, path: impl Into<PathBuf>) -> Self {
        Self::Layout {
            name,
            color,
            path: path.into(),
            key: None,
        }
    }

    /// Sets the property key on events that carry one.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        match &mut self {
            Self::NamedAsset { key: slot, .. }
            | Self::GeneratedIdentifier { key: slot, .. }
            | Self::System { key: slot, .. }
            | Self::Rgb { key: slot, .. }
            | Self::Gray { key: slot, .. }
            | Self::Layout { key: slot, .. } => *slot = Some(key.into()),
            Self::String { .. } | Self::Pattern { .. } => {}
        }
        self
    }

    /// Returns the file this event was found in.
    pub fn path(&self) -> &Path {
        match self {
            Self::NamedAsset { path, .. }
            | Self::GeneratedIdentifier { path, .. }
            | Self::System { path, .. }
            | Self::Rgb { path, .. }
            | Self::Gray { path, .. }
            | Self::String { path, .. }
            | Self::Pattern { path, .. }
            | Self::Layout { path, .. } => path,
        }
    }
}

fn opaque() -> f32 {
    1.0
}
