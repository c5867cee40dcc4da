//! Project color records

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::ColorVariant;

/// One color of the project together with everything known about its use.
///
/// The `variant` is the record's identity. The remaining fields only ever
/// grow: merging a sighting of the same color unions them.
///
/// # Example
///
/// ```
/// use usedcolors_lib::model::{ColorVariant, NormalizedColor, ProjectColorRecord};
///
/// let record = ProjectColorRecord::new(ColorVariant::Custom(NormalizedColor::gray(0.5, 1.0)))
///     .with_name("midGray")
///     .with_path("/app/View.swift")
///     .with_property_key(Some("backgroundColor"));
/// assert_eq!(record.names.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectColorRecord {
    /// The color itself.
    pub variant: ColorVariant,
    /// Names the color is known by (asset names, layout element names).
    pub names: BTreeSet<String>,
    /// Files the color was declared or used in.
    pub used_in_paths: BTreeSet<PathBuf>,
    /// Property keys the color was assigned to.
    pub property_keys: BTreeSet<String>,
}

impl ProjectColorRecord {
    /// Creates a record with no names, paths or keys.
    pub fn new(variant: impl Into<ColorVariant>) -> Self {
        Self {
            variant: variant.into(),
            names: BTreeSet::new(),
            used_in_paths: BTreeSet::new(),
            property_keys: BTreeSet::new(),
        }
    }

    /// Adds a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Adds a usage path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.used_in_paths.insert(path.into());
        self
    }

    /// Adds a property key when one is present.
    pub fn with_property_key<S: Into<String>>(mut self, key: Option<S>) -> Self {
        if let Some(key) = key {
            self.property_keys.insert(key.into());
        }
        self
    }

    /// Unions the accumulators of `other` into this record.
    ///
    /// Returns `false` and leaves the record untouched when `other` is a
    /// different color.
    pub fn merge(&mut self, other: ProjectColorRecord) -> bool {
        if !self.variant.same_color(&other.variant) {
            return false;
        }
        self.names.extend(other.names);
        self.used_in_paths.extend(other.used_in_paths);
        self.property_keys.extend(other.property_keys);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppearanceVariant;
    use crate::model::NormalizedColor;

    fn red() -> NormalizedColor {
        NormalizedColor::rgba(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_merge_unions_accumulators() {
        let mut record = ProjectColorRecord::new(ColorVariant::Custom(red()))
            .with_name("alert")
            .with_path("/app/A.swift")
            .with_property_key(Some("tintColor"));
        let other = ProjectColorRecord::new(AppearanceVariant::Any(red()))
            .with_name("danger")
            .with_path("/app/A.swift")
            .with_path("/app/Assets.xcassets/danger.colorset")
            .with_property_key(None::<String>);

        assert!(record.merge(other));
        assert_eq!(record.names.len(), 2);
        assert_eq!(record.used_in_paths.len(), 2);
        assert_eq!(record.property_keys.len(), 1);
    }

    #[test]
    fn test_merge_rejects_other_colors() {
        let mut record = ProjectColorRecord::new(ColorVariant::Custom(red())).with_name("alert");
        let other = ProjectColorRecord::new(ColorVariant::system("systemRed")).with_name("x");

        assert!(!record.merge(other));
        assert_eq!(record.names.len(), 1);
    }
}
