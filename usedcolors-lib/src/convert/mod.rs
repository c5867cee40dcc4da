//! Conversion of declared samples into normalized sRGB
//!
//! Every supported color space is brought into the canonical model here:
//! channel text is decoded, the space's transform into sRGB is applied and
//! the result is clamped into range.

mod channel;
mod profile;
mod sample;

pub use channel::*;
pub use profile::*;
pub use sample::*;

use crate::model::NormalizedColor;

/// Converts a declared sample into a normalized color.
///
/// Returns `None` when the components do not fit the declared space (gray
/// channels in an RGB space or the other way round). The caller decides how
/// to report the dropped sample.
pub fn normalize(sample: &AssetColorSample) -> Option<NormalizedColor> {
    use ColorSpace::*;

    let color = match (&sample.color_space, &sample.components) {
        (
            Srgb,
            SampleComponents::Rgb {
                red,
                green,
                blue,
                alpha,
            },
        ) => NormalizedColor::rgba(
            decode_channel(red),
            decode_channel(green),
            decode_channel(blue),
            decode_alpha(alpha),
        ),
        (
            space @ (ExtendedSrgb | ExtendedLinearSrgb | DisplayP3),
            SampleComponents::Rgb {
                red,
                green,
                blue,
                alpha,
            },
        ) => {
            let raw = [red, green, blue].map(|text| decode_component(text));
            let [r, g, b] = match space {
                // same primaries and curve as sRGB, only the range differs
                ExtendedSrgb => raw,
                ExtendedLinearSrgb => raw.map(linear_to_srgb),
                _ => display_p3_to_srgb(raw),
            };
            NormalizedColor::rgba(r, g, b, decode_alpha(alpha))
        }
        (space, SampleComponents::Gray { white, alpha }) if space.is_gray() => {
            let white = match space {
                GrayGamma22 => decode_channel(white),
                _ => decode_component(white),
            };
            NormalizedColor::gray(gray22_to_srgb(white), decode_alpha(alpha))
        }
        _ => return None,
    };

    Some(color.with_raw_text(sample.describe()))
}

impl AssetColorSample {
    /// Converts this sample into a normalized color. See [`normalize`].
    pub fn normalize(&self) -> Option<NormalizedColor> {
        normalize(self)
    }
}
