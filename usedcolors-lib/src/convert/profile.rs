//! Colorimetric transforms into sRGB
//!
//! Transfer curves and primaries follow IEC 61966-2-1 (sRGB) and the CSS
//! Color 4 conversion code for Display P3. Extended variants apply the same
//! curve mirrored around zero so out-of-gamut values survive until the final
//! clamp.

/// Gamma exponent of the generic gray profile.
const GRAY_GAMMA: f64 = 2.2;

// https://www.w3.org/TR/css-color-4/#color-conversion-code
#[allow(clippy::excessive_precision)]
const P3_TO_SRGB: [[f64; 3]; 3] = [
    [1.224_940_176_280_559_8, -0.224_940_176_280_559_96, 0.0],
    [-0.042_056_954_709_688_16, 1.042_056_954_709_688_2, 0.0],
    [-0.019_637_554_590_334_432, -0.078_636_045_550_631_88, 1.098_273_600_140_966_3],
];

/// Linear light to sRGB-encoded value.
pub fn linear_to_srgb(value: f32) -> f32 {
    encode_srgb(f64::from(value)) as f32
}

/// Encoded Display P3 to encoded sRGB, unclamped.
pub fn display_p3_to_srgb(rgb: [f32; 3]) -> [f32; 3] {
    let linear = p3_to_srgb_linear(rgb.map(|c| decode_srgb(f64::from(c))));
    linear.map(|c| encode_srgb(c) as f32)
}

/// Encoded gamma 2.2 gray to encoded sRGB gray, unclamped.
pub fn gray22_to_srgb(white: f32) -> f32 {
    encode_srgb(decode_gamma22(f64::from(white))) as f32
}

// Evaluated in f64: full-scale input must narrow back to exactly 1.0.

fn decode_srgb(value: f64) -> f64 {
    mirrored(value, |c| {
        if c <= 0.040_45 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    })
}

fn encode_srgb(value: f64) -> f64 {
    mirrored(value, |c| {
        if c <= 0.003_130_8 {
            c * 12.92
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        }
    })
}

fn decode_gamma22(value: f64) -> f64 {
    mirrored(value, |c| c.powf(GRAY_GAMMA))
}

fn p3_to_srgb_linear(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    P3_TO_SRGB.map(|row| row[0] * r + row[1] * g + row[2] * b)
}

fn mirrored(value: f64, curve: impl Fn(f64) -> f64) -> f64 {
    if value < 0.0 {
        -curve(-value)
    } else {
        curve(value)
    }
}
