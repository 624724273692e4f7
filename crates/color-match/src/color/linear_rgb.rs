//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! It is the bridge between gamma-encoded sRGB and CIE XYZ.

use super::gamma::{linear_to_srgb, srgb_to_linear};
use super::srgb::Srgb;

/// A color in linear RGB color space (sRGB primaries, D65 white).
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for out-of-gamut intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode each channel.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode each channel. The result is not clamped.
    fn from(linear: LinearRgb) -> Self {
        Srgb::new(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Known gamma conversion values against the IEC 61966-2-1 formula.
    #[test]
    fn test_known_gamma_values() {
        // sRGB 0.5 -> linear 0.214041...
        let mid = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!(
            (mid.r - 0.214041).abs() < 1e-6,
            "sRGB 0.5 -> linear expected ~0.214041, got {}",
            mid.r
        );

        // linear 0.5 -> sRGB 0.735356...
        let srgb_mid = Srgb::from(LinearRgb::new(0.5, 0.5, 0.5));
        assert!(
            (srgb_mid.r - 0.735356).abs() < 1e-6,
            "linear 0.5 -> sRGB expected ~0.735356, got {}",
            srgb_mid.r
        );
    }

    #[test]
    fn test_srgb_round_trip_accuracy() {
        for i in 0..=255u8 {
            let original = Srgb::from_u8(i, i, i);
            let back = Srgb::from(LinearRgb::from(original));
            assert_eq!(back.to_bytes(), original.to_bytes(), "value {i}");
        }
    }
}
