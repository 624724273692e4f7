//! sRGB transfer functions (IEC 61966-2-1).
//!
//! The exact piecewise formula is used instead of a lookup table: resampled
//! pixels can land slightly outside 0.0..=1.0 and must still convert without
//! clamping.

/// Decode one gamma-encoded sRGB channel to linear light.
///
/// Inputs below the linear-segment threshold (including negatives) take the
/// linear branch, so every finite input yields a finite output.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel to gamma-encoded sRGB.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        assert!(linear_to_srgb(0.0).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb_to_linear(-0.1);
        for i in -99..=1100 {
            let curr = srgb_to_linear(i as f64 / 1000.0);
            assert!(curr >= prev, "srgb_to_linear not monotonic at {i}");
            prev = curr;
        }

        let mut prev = linear_to_srgb(-0.1);
        for i in -99..=1100 {
            let curr = linear_to_srgb(i as f64 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert!(srgb_to_linear(1.05) > 1.0);
        assert!(srgb_to_linear(-0.02) < 0.0);
        assert!(linear_to_srgb(1.05) > 1.0);
        assert!(linear_to_srgb(-0.02) < 0.0);
    }

    #[test]
    fn test_round_trip() {
        for i in 0..=255 {
            let v = i as f64 / 255.0;
            let back = linear_to_srgb(srgb_to_linear(v));
            assert!((back - v).abs() < 1e-12, "round trip failed for {v}: {back}");
        }
    }
}
