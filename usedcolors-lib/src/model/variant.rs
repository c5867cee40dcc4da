//! Color variants and their identity

use serde::Serialize;

use super::AppearanceMode;
use super::AppearanceVariant;
use super::NormalizedColor;
use crate::system;

/// The ways a color can be expressed in a project.
///
/// Equality is not structural. `Custom` and `Asset` colors compare by their
/// hex projection, and a literal equals a single-mode asset color of the same
/// value. See [`IdentityKey`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "color", rename_all = "snake_case")]
pub enum ColorVariant {
    /// A platform-named color such as `systemBlue`.
    System { name: String, alpha: f32 },
    /// A literal color built in code or layout.
    Custom(NormalizedColor),
    /// A color declared in an asset catalog.
    Asset(AppearanceVariant),
}

/// Hashable identity of a [`ColorVariant`].
///
/// Two variants are equal exactly when their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// Name and alpha bits of a system color.
    System(String, u32),
    /// Hex of a literal or single-mode asset color.
    Single(String),
    /// Light and dark hex of a two-mode asset color.
    Pair(String, String),
}

impl ColorVariant {
    /// A fully opaque system color.
    pub fn system(name: impl Into<String>) -> Self {
        Self::System {
            name: name.into(),
            alpha: 1.0,
        }
    }

    /// A system color with explicit alpha.
    pub fn system_with_alpha(name: impl Into<String>, alpha: f32) -> Self {
        Self::System {
            name: name.into(),
            alpha,
        }
    }

    /// Returns the identity this variant aggregates under.
    pub fn identity(&self) -> IdentityKey {
        match self {
            Self::System { name, alpha } => {
                // -0.0 == 0.0 must hash alike
                let alpha = if *alpha == 0.0 { 0.0_f32 } else { *alpha };
                IdentityKey::System(name.clone(), alpha.to_bits())
            }
            Self::Custom(color) | Self::Asset(AppearanceVariant::Any(color)) => {
                IdentityKey::Single(color.hex())
            }
            Self::Asset(AppearanceVariant::AnyDark { light, dark }) => {
                IdentityKey::Pair(light.hex(), dark.hex())
            }
        }
    }

    /// Returns `true` if both variants denote the same project color.
    pub fn same_color(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }

    /// Returns `true` for platform-named colors.
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// Returns the color shown in the given mode, if this is not a system color.
    pub fn color(&self, mode: AppearanceMode) -> Option<&NormalizedColor> {
        match self {
            Self::System { .. } => None,
            Self::Custom(color) => Some(color),
            Self::Asset(appearance) => Some(appearance.color(mode)),
        }
    }

    /// Returns the hex shown for the given mode.
    ///
    /// System colors resolve through the named-system tables and yield `None`
    /// for names the tables do not know.
    pub fn hex(&self, mode: AppearanceMode) -> Option<String> {
        match self {
            Self::System { name, .. } => system::system_hex(name, mode).map(str::to_string),
            _ => self.color(mode).map(NormalizedColor::hex),
        }
    }

    /// Returns the original source text of this color, if known.
    pub fn raw(&self) -> Option<String> {
        match self {
            Self::System { .. } => None,
            Self::Custom(color) => color.raw_text.clone(),
            Self::Asset(appearance) => appearance.raw(),
        }
    }

    /// Short label used in diagnostics: the light hex, or the system name.
    pub fn label(&self) -> String {
        match self {
            Self::System { name, .. } => name.clone(),
            _ => self.hex(AppearanceMode::Light).unwrap_or_default(),
        }
    }
}

impl PartialEq for ColorVariant {
    fn eq(&self, other: &Self) -> bool {
        self.same_color(other)
    }
}

impl Eq for ColorVariant {}

impl std::hash::Hash for ColorVariant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl From<NormalizedColor> for ColorVariant {
    fn from(color: NormalizedColor) -> Self {
        Self::Custom(color)
    }
}

impl From<AppearanceVariant> for ColorVariant {
    fn from(appearance: AppearanceVariant) -> Self {
        Self::Asset(appearance)
    }
}
