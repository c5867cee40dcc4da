//! Visual-similarity ordering of catalog records
//!
//! Records are bucketed by hue, perceived luminosity and HSV value, then
//! sorted so neighbouring entries look alike. Odd hue bands run their
//! luminosity and value buckets backwards, giving a serpentine walk through
//! color space instead of a hard jump from light to dark at each band edge.
//!
//! System colors carry no resolved RGB here and always sort last, by name.

use std::cmp::Ordering;

use palette::Hsv;
use palette::IntoColor;
use palette::Srgb;

use crate::model::ColorVariant;
use crate::model::NormalizedColor;
use crate::model::ProjectColorRecord;

/// Orders records for presentation.
///
/// # Example
///
/// ```
/// use usedcolors_lib::order::SimilarityOrder;
/// use usedcolors_lib::model::{ColorVariant, NormalizedColor, ProjectColorRecord};
///
/// let mut records = vec![
///     ProjectColorRecord::new(ColorVariant::system("label")),
///     ProjectColorRecord::new(NormalizedColor::rgba(0.0, 0.0, 1.0, 1.0)),
/// ];
/// SimilarityOrder::new(1).sort(&mut records);
/// assert!(records[1].variant.is_system());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityOrder {
    granularity: u32,
}

impl Default for SimilarityOrder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SimilarityOrder {
    /// Creates an orderer with `granularity` buckets per dimension.
    ///
    /// A granularity of 0 is treated as 1.
    pub fn new(granularity: u32) -> Self {
        Self {
            granularity: granularity.max(1),
        }
    }

    /// Returns the bucket count per dimension.
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Sorts records in place. Equal keys keep their relative order.
    pub fn sort(&self, records: &mut [ProjectColorRecord]) {
        records.sort_by_cached_key(|record| self.key(&record.variant));
    }

    fn key(&self, variant: &ColorVariant) -> SortKey {
        match variant {
            ColorVariant::System { name, .. } => SortKey::System(name.clone()),
            ColorVariant::Custom(color) => self.color_key(color),
            ColorVariant::Asset(appearance) => self.color_key(appearance.representative()),
        }
    }

    fn color_key(&self, color: &NormalizedColor) -> SortKey {
        let hsv: Hsv = Srgb::new(color.red, color.green, color.blue).into_color();
        let luminosity =
            (0.241 * color.red + 0.691 * color.green + 0.068 * color.blue).sqrt();
        let (hue, lum, value) = buckets(
            hsv.hue.into_positive_degrees(),
            luminosity,
            hsv.value,
            self.granularity,
        );
        SortKey::Color { hue, lum, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SortKey {
    Color { hue: u32, lum: u32, value: u32 },
    System(String),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Color { hue, lum, value },
                Self::Color {
                    hue: other_hue,
                    lum: other_lum,
                    value: other_value,
                },
            ) => (other_hue, other_lum, other_value).cmp(&(hue, lum, value)),
            (Self::Color { .. }, Self::System(_)) => Ordering::Less,
            (Self::System(_), Self::Color { .. }) => Ordering::Greater,
            (Self::System(a), Self::System(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Quantizes hue (degrees), luminosity and value into buckets, inverting the
/// last two on odd hue buckets.
fn buckets(hue: f32, luminosity: f32, value: f32, granularity: u32) -> (u32, u32, u32) {
    let scale = granularity as f32;
    let quantize = |x: f32| (x * scale).floor() as u32;

    let hue_bucket = quantize(hue);
    let mut lum_bucket = quantize(luminosity);
    let mut value_bucket = quantize(value);

    if hue_bucket % 2 == 1 {
        lum_bucket = granularity.saturating_sub(lum_bucket);
        value_bucket = granularity.saturating_sub(value_bucket);
    }

    (hue_bucket, lum_bucket, value_bucket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppearanceVariant;

    fn rgb(red: f32, green: f32, blue: f32) -> ProjectColorRecord {
        ProjectColorRecord::new(NormalizedColor::rgba(red, green, blue, 1.0))
    }

    fn labels(records: &[ProjectColorRecord]) -> Vec<String> {
        records.iter().map(|r| r.variant.label()).collect()
    }

    #[test]
    fn test_buckets_even_hue() {
        assert_eq!(buckets(2.5, 0.2, 0.3, 1), (2, 0, 0));
        assert_eq!(buckets(0.0, 1.0, 1.0, 1), (0, 1, 1));
    }

    #[test]
    fn test_buckets_serpentine_on_odd_hue() {
        assert_eq!(buckets(1.5, 0.2, 0.3, 1), (1, 1, 1));
        assert_eq!(buckets(1.5, 1.0, 1.0, 1), (1, 0, 0));
        assert_eq!(buckets(0.5, 0.26, 0.76, 4), (2, 1, 3));
        assert_eq!(buckets(0.25, 0.26, 0.76, 4), (1, 3, 1));
    }

    #[test]
    fn test_descending_hue() {
        let mut records = vec![rgb(1.0, 0.0, 0.0), rgb(0.0, 1.0, 0.0), rgb(0.0, 0.0, 1.0)];
        SimilarityOrder::new(1).sort(&mut records);
        assert_eq!(
            labels(&records),
            ["#0000FF 1.00", "#00FF00 1.00", "#FF0000 1.00"]
        );
    }

    #[test]
    fn test_system_colors_last_by_name() {
        let mut records = vec![
            ProjectColorRecord::new(ColorVariant::system("systemRed")),
            rgb(1.0, 0.0, 0.0),
            ProjectColorRecord::new(ColorVariant::system("label")),
            ProjectColorRecord::new(AppearanceVariant::Any(NormalizedColor::gray(0.5, 1.0))),
        ];
        SimilarityOrder::default().sort(&mut records);

        let tail = labels(&records[2..]);
        assert_eq!(tail, ["label", "systemRed"]);
        assert!(records[..2].iter().all(|r| !r.variant.is_system()));
    }

    #[test]
    fn test_sort_is_deterministic() {
        let input = vec![
            rgb(0.9, 0.1, 0.1),
            rgb(0.1, 0.9, 0.4),
            ProjectColorRecord::new(ColorVariant::system("link")),
            rgb(0.2, 0.2, 0.8),
            rgb(0.5, 0.5, 0.5),
            rgb(0.9, 0.1, 0.1).with_name("dupe"),
        ];
        let order = SimilarityOrder::new(3);

        let mut first = input.clone();
        let mut second = input;
        order.sort(&mut first);
        order.sort(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_keys_stay_adjacent_and_stable() {
        let mut records = vec![
            rgb(0.0, 0.0, 0.0).with_name("first"),
            rgb(1.0, 0.0, 0.0),
            rgb(0.0, 0.0, 0.0).with_name("second"),
        ];
        SimilarityOrder::new(1).sort(&mut records);

        let names: Vec<_> = records
            .iter()
            .filter_map(|r| r.names.iter().next().cloned())
            .collect();
        assert_eq!(names, ["first", "second"]);
        let unnamed: Vec<_> = records.iter().map(|r| r.names.is_empty()).collect();
        // red shares the hue bucket but has the higher value bucket
        assert_eq!(unnamed, [true, false, false]);
    }

    #[test]
    fn test_zero_granularity_is_one() {
        assert_eq!(SimilarityOrder::new(0).granularity(), 1);
    }
}
