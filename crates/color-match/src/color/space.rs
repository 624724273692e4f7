//! Working color spaces and space-tagged colors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::lab::Lab;
use super::srgb::Srgb;

/// The spaces a palette index can be built in.
///
/// Distances are Euclidean in the chosen space, so the unit (and therefore a
/// sensible rejection threshold) depends on it: sRGB distances are in channel
/// units (0.0..=sqrt(3)), Lab distances are delta E (roughly 0..=150).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Gamma-encoded device RGB.
    #[default]
    Srgb,
    /// CIE L\*a\*b\* (D65).
    Lab,
}

impl ColorSpace {
    /// Every supported space, in a stable order.
    pub const ALL: [ColorSpace; 2] = [ColorSpace::Srgb, ColorSpace::Lab];

    /// Lowercase identifier used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::Lab => "lab",
        }
    }

    /// Maximum accepted distance when the caller does not supply one.
    ///
    /// 0.2 in sRGB accepts a solid navy photo (mean about 0.18 from `navy`)
    /// while rejecting a mid-grey photo; 20 delta E is the Lab counterpart.
    pub fn default_max_distance(self) -> f64 {
        match self {
            ColorSpace::Srgb => 0.2,
            ColorSpace::Lab => 20.0,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color space name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color space '{0}' (expected srgb or lab)")]
pub struct ParseSpaceError(pub String);

impl FromStr for ColorSpace {
    type Err = ParseSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(ColorSpace::Srgb),
            "lab" => Ok(ColorSpace::Lab),
            _ => Err(ParseSpaceError(s.to_string())),
        }
    }
}

/// A color tagged with the space it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Srgb(Srgb),
    Lab(Lab),
}

impl Color {
    /// The space this color is expressed in.
    pub fn space(&self) -> ColorSpace {
        match self {
            Color::Srgb(_) => ColorSpace::Srgb,
            Color::Lab(_) => ColorSpace::Lab,
        }
    }

    /// Express this color in `space`. Identity when it already is.
    pub fn to_space(self, space: ColorSpace) -> Color {
        match (self, space) {
            (Color::Srgb(_), ColorSpace::Srgb) | (Color::Lab(_), ColorSpace::Lab) => self,
            (Color::Srgb(srgb), ColorSpace::Lab) => Color::Lab(Lab::from(srgb)),
            (Color::Lab(lab), ColorSpace::Srgb) => Color::Srgb(Srgb::from(lab)),
        }
    }

    /// Raw channel values in this color's own space.
    pub fn components(&self) -> [f64; 3] {
        match self {
            Color::Srgb(srgb) => srgb.to_array(),
            Color::Lab(lab) => lab.to_array(),
        }
    }

    /// Channel values after conversion into `space`.
    pub fn components_in(self, space: ColorSpace) -> [f64; 3] {
        self.to_space(space).components()
    }

    /// The color as device RGB, converting if needed.
    pub fn to_srgb(self) -> Srgb {
        match self {
            Color::Srgb(srgb) => srgb,
            Color::Lab(lab) => Srgb::from(lab),
        }
    }
}

impl From<Srgb> for Color {
    fn from(srgb: Srgb) -> Self {
        Color::Srgb(srgb)
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        Color::Lab(lab)
    }
}
