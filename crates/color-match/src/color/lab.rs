//! CIE L\*a\*b\* color space
//!
//! Lab is the perceptual space of the matcher: Euclidean distance between two
//! Lab colors is the CIE 1976 color difference (delta E\*ab), which tracks
//! perceived difference far better than distance between raw sRGB triples.
//!
//! The reference white is D65, the native white of sRGB, so no chromatic
//! adaptation is needed on the way in or out.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// CIE threshold between the cube-root and linear segments (6/29)^3.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE slope of the linear segment (29/3)^3.
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE L\*a\*b\* (D65).
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = diffuse white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Channels as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// CIE 1976 color difference (Euclidean distance in Lab).
    ///
    /// ```
    /// use color_match::Lab;
    ///
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// assert_eq!(black.delta_e(white), 100.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / Xyz::D65.x);
        let fy = lab_f(xyz.y / Xyz::D65.y);
        let fz = lab_f(xyz.z / Xyz::D65.z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let yr = if lab.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            lab.l / KAPPA
        };

        Xyz {
            x: lab_f_inv(fx) * Xyz::D65.x,
            y: yr * Xyz::D65.y,
            z: lab_f_inv(fz) * Xyz::D65.z,
        }
    }
}

impl From<Srgb> for Lab {
    /// sRGB -> linear RGB -> XYZ -> Lab.
    fn from(srgb: Srgb) -> Self {
        Lab::from(Xyz::from(LinearRgb::from(srgb)))
    }
}

impl From<Lab> for Srgb {
    /// Lab -> XYZ -> linear RGB -> sRGB. Out-of-gamut colors are not clamped.
    fn from(lab: Lab) -> Self {
        Srgb::from(LinearRgb::from(Xyz::from(lab)))
    }
}
