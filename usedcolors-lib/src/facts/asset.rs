//! Declared asset-catalog color entries

use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

use crate::convert::AssetColorSample;
use crate::error::FactsError;
use crate::model::AppearanceQualifier;
use crate::model::AppearanceSlot;
use crate::model::AppearanceVariant;

/// One sample of an asset entry with the appearance it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetColorElement {
    /// The declared color. Catalogs may list appearance slots without one.
    #[serde(default)]
    pub color: Option<AssetColorSample>,
    /// Appearance qualifiers; empty means the default appearance.
    #[serde(default)]
    pub appearances: Vec<AppearanceQualifier>,
}

/// A named color resource from an asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetColorEntry {
    /// Asset name, as code refers to it.
    pub name: String,
    /// Absolute path of the entry's folder.
    pub path: PathBuf,
    /// Declared samples.
    #[serde(default)]
    pub colors: Vec<AssetColorElement>,
}

#[derive(Deserialize)]
struct Contents {
    #[serde(default)]
    colors: Vec<AssetColorElement>,
}

impl AssetColorEntry {
    /// Creates an entry with no samples.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            colors: Vec::new(),
        }
    }

    /// Adds a sample for the given appearance.
    pub fn with_sample(
        mut self,
        sample: AssetColorSample,
        appearances: impl IntoIterator<Item = AppearanceQualifier>,
    ) -> Self {
        self.colors.push(AssetColorElement {
            color: Some(sample),
            appearances: appearances.into_iter().collect(),
        });
        self
    }

    /// Builds an entry from the text of a catalog `Contents.json` file.
    ///
    /// Unknown keys such as `idiom` and `info` are ignored.
    pub fn from_contents(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        json: &str,
    ) -> Result<Self, FactsError> {
        let contents: Contents = serde_json::from_str(json)?;
        Ok(Self {
            name: name.into(),
            path: path.into(),
            colors: contents.colors,
        })
    }

    /// Resolves the declared samples into one appearance value.
    ///
    /// Samples that fail to normalize are dropped. Returns `None` when nothing
    /// usable remains.
    pub fn resolve(&self) -> Option<AppearanceVariant> {
        let samples = self.colors.iter().filter_map(|element| {
            let sample = element.color.as_ref()?;
            match sample.normalize() {
                Some(color) => Some((AppearanceSlot::from_qualifiers(&element.appearances), color)),
                None => {
                    debug!(
                        "Dropping sample of asset {}: components do not fit {}",
                        self.name, sample.color_space
                    );
                    None
                }
            }
        });
        AppearanceVariant::resolve(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ColorSpace;
    use crate::convert::SampleComponents;
    use crate::model::QualifierValue;

    const CONTENTS: &str = r#"{
      "colors" : [
        {
          "color" : {
            "color-space" : "srgb",
            "components" : { "alpha" : "1.000", "blue" : "0xFF", "green" : "0x00", "red" : "0x00" }
          },
          "idiom" : "universal"
        },
        {
          "appearances" : [ { "appearance" : "luminosity", "value" : "dark" } ],
          "color" : {
            "color-space" : "srgb",
            "components" : { "alpha" : "1.000", "blue" : "0.500", "green" : "0.500", "red" : "0.500" }
          },
          "idiom" : "universal"
        }
      ],
      "info" : { "author" : "xcode", "version" : 1 }
    }"#;

    #[test]
    fn test_from_contents() {
        let entry =
            AssetColorEntry::from_contents("brandTint", "/app/A.xcassets/brandTint.colorset", CONTENTS)
                .unwrap();
        assert_eq!(entry.colors.len(), 2);

        let resolved = entry.resolve().unwrap();
        let AppearanceVariant::AnyDark { light, dark } = resolved else {
            panic!("expected a light/dark pair");
        };
        assert_eq!(light.hex(), "#0000FF 1.00");
        assert_eq!(dark.hex(), "#7F7F7F 1.00");
    }

    #[test]
    fn test_malformed_contents() {
        let result = AssetColorEntry::from_contents("x", "/x.colorset", "{ not json");
        assert!(matches!(result, Err(FactsError::Json(_))));
    }

    #[test]
    fn test_mismatched_samples_are_dropped() {
        let gray_in_rgb = AssetColorSample::new(ColorSpace::Srgb, SampleComponents::gray("1", "1"));
        let entry = AssetColorEntry::new("broken", "/app/broken.colorset").with_sample(gray_in_rgb, []);
        assert_eq!(entry.resolve(), None);
    }

    #[test]
    fn test_slot_without_color() {
        let json = r#"{ "colors": [ { "idiom": "universal" } ] }"#;
        let entry = AssetColorEntry::from_contents("empty", "/app/empty.colorset", json).unwrap();
        assert_eq!(entry.resolve(), None);

        let red = AssetColorSample::new(ColorSpace::Srgb, SampleComponents::rgb("1", "0", "0", "1"));
        let entry = entry.with_sample(red, [AppearanceQualifier::luminosity(QualifierValue::Light)]);
        assert!(matches!(entry.resolve(), Some(AppearanceVariant::Any(_))));
    }
}
