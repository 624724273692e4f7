//! sRGB color type
//!
//! sRGB is the device color space of image files and palette definitions.
//! It applies a gamma curve to linear light values for perceptual uniformity.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color in sRGB color space.
///
/// Values are nominally in the range 0.0..=1.0 (mapping to 0..255 for 8-bit),
/// but are never clamped: resampled pixels and inverse conversions may land
/// slightly outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_match::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Channels as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form of [`to_bytes()`](Self::to_bytes).
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Euclidean distance between two sRGB triples.
    #[inline]
    pub fn distance(self, other: Srgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`: exactly two hex digits per channel.
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_match::Srgb;
    ///
    /// let teal: Srgb = "#008080".parse().unwrap();
    /// assert_eq!(teal.to_bytes(), [0, 128, 128]);
    ///
    /// assert!("#F00".parse::<Srgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.chars().count() != 6 {
            return Err(ParseColorError::InvalidLength {
                found: digits.chars().count(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex {
                input: s.to_string(),
            });
        }

        // All six bytes are ASCII hex digits, so every slice is a char boundary.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::InvalidHex {
                input: s.to_string(),
            })
        };
        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
