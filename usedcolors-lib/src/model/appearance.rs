//! Appearance qualifiers and two-mode colors

use serde::Deserialize;
use serde::Serialize;

use super::AppearanceMode;
use super::NormalizedColor;

/// Which qualifier an asset appearance entry sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualifierKind {
    Luminosity,
    Contrast,
}

/// Value of an asset appearance qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualifierValue {
    Light,
    Dark,
    High,
}

/// One `{ appearance, value }` pair attached to a declared color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AppearanceQualifier {
    pub appearance: QualifierKind,
    pub value: QualifierValue,
}

impl AppearanceQualifier {
    /// A luminosity qualifier.
    pub fn luminosity(value: QualifierValue) -> Self {
        Self {
            appearance: QualifierKind::Luminosity,
            value,
        }
    }

    /// A high-contrast qualifier.
    pub fn high_contrast() -> Self {
        Self {
            appearance: QualifierKind::Contrast,
            value: QualifierValue::High,
        }
    }
}

/// Luminosity slot a sample was declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Luminosity {
    #[default]
    Any,
    Light,
    Dark,
}

/// The appearance slot a declared sample fills, derived from its qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AppearanceSlot {
    pub luminosity: Luminosity,
    pub high_contrast: bool,
}

impl AppearanceSlot {
    /// Derives the slot from a qualifier list.
    ///
    /// The first luminosity qualifier decides light/dark; any contrast
    /// qualifier marks the slot as high contrast.
    pub fn from_qualifiers(qualifiers: &[AppearanceQualifier]) -> Self {
        let luminosity = qualifiers
            .iter()
            .find(|q| q.appearance == QualifierKind::Luminosity)
            .map(|q| match q.value {
                QualifierValue::Light => Luminosity::Light,
                QualifierValue::Dark => Luminosity::Dark,
                QualifierValue::High => Luminosity::Any,
            })
            .unwrap_or_default();
        let high_contrast = qualifiers
            .iter()
            .any(|q| q.appearance == QualifierKind::Contrast);

        Self {
            luminosity,
            high_contrast,
        }
    }
}

/// A resolved asset color: either one color for every appearance, or a
/// light/dark pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceVariant {
    Any(NormalizedColor),
    AnyDark {
        light: NormalizedColor,
        dark: NormalizedColor,
    },
}

impl AppearanceVariant {
    /// Merges the samples of one asset entry into a single appearance value.
    ///
    /// Precedence:
    /// 1. light + dark → `AnyDark(light, dark)`
    /// 2. default + dark → `AnyDark(default, dark)`
    /// 3. default → `Any(default)`
    /// 4. light → `Any(light)`
    ///
    /// High-contrast samples never take part. When a slot appears twice the
    /// later sample wins. Returns `None` when no rule applies.
    pub fn resolve<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = (AppearanceSlot, NormalizedColor)>,
    {
        let mut any = None;
        let mut light = None;
        let mut dark = None;

        for (slot, color) in samples {
            if slot.high_contrast {
                continue;
            }
            match slot.luminosity {
                Luminosity::Any => any = Some(color),
                Luminosity::Light => light = Some(color),
                Luminosity::Dark => dark = Some(color),
            }
        }

        match (any, light, dark) {
            (_, Some(light), Some(dark)) => Some(Self::AnyDark { light, dark }),
            (Some(any), None, Some(dark)) => Some(Self::AnyDark { light: any, dark }),
            (Some(any), _, None) => Some(Self::Any(any)),
            (None, Some(light), None) => Some(Self::Any(light)),
            (None, None, _) => None,
        }
    }

    /// Returns the color shown in the given mode.
    pub fn color(&self, mode: AppearanceMode) -> &NormalizedColor {
        match (self, mode) {
            (Self::Any(color), _) => color,
            (Self::AnyDark { light, .. }, AppearanceMode::Light) => light,
            (Self::AnyDark { dark, .. }, AppearanceMode::Dark) => dark,
        }
    }

    /// Returns the color used to place this value in a visual ordering.
    pub fn representative(&self) -> &NormalizedColor {
        self.color(AppearanceMode::Light)
    }

    /// Returns the original source text, labelled per mode for two-mode colors.
    pub fn raw(&self) -> Option<String> {
        match self {
            Self::Any(color) => color.raw_text.clone(),
            Self::AnyDark { light, dark } => {
                let mut parts = Vec::new();
                if let Some(raw) = &light.raw_text {
                    parts.push(format!("LightMode: {raw}"));
                }
                if let Some(raw) = &dark.raw_text {
                    parts.push(format!("DarkMode: {raw}"));
                }
                (!parts.is_empty()).then(|| parts.join(", "))
            }
        }
    }
}
