//! Ordered palette of named reference colors.
//!
//! This module provides the `Palette` type: the fixed list of `(name, color)`
//! entries that images are matched against. Entry order is significant: it is
//! the tie-break order for equidistant matches.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use super::named::BuiltinPalette;
use crate::color::Srgb;

/// An ordered set of named sRGB reference colors.
///
/// Names are unique. Colors may repeat: the CSS3 table carries aliases such
/// as `aqua`/`cyan` and `gray`/`grey`, and a query landing on such a color
/// resolves to whichever alias comes first.
///
/// # Example
///
/// ```
/// use color_match::{Palette, Srgb};
///
/// let palette = Palette::from_hex([("black", "#000000"), ("white", "#ffffff")]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.name(1), "white");
/// assert_eq!(palette.color(1), Srgb::new(1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    names: Vec<String>,
    colors: Vec<Srgb>,
}

impl Palette {
    /// Create a palette from `(name, color)` entries, preserving their order.
    ///
    /// # Errors
    ///
    /// - no entries ([`PaletteError::EmptyPalette`])
    /// - a name appears twice ([`PaletteError::DuplicateName`])
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Srgb)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut colors = Vec::new();
        let mut seen = HashSet::new();

        for (name, color) in entries {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(PaletteError::DuplicateName { name });
            }
            names.push(name);
            colors.push(color);
        }

        if names.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self { names, colors })
    }

    /// Create a palette from `(name, hex)` entries.
    ///
    /// Each value must be `#RRGGBB` or `RRGGBB` (see [`Srgb::from_str`]).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] naming the first entry whose
    /// value does not parse, or any error of [`Palette::new`].
    ///
    /// ```
    /// use color_match::{Palette, PaletteError};
    ///
    /// let err = Palette::from_hex([("bogus", "not-a-hex-color")]).unwrap_err();
    /// assert!(matches!(err, PaletteError::InvalidColor { ref name, .. } if name == "bogus"));
    /// ```
    pub fn from_hex<I, N, V>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: AsRef<str>,
    {
        let parsed = entries
            .into_iter()
            .map(|(name, value)| {
                let name = name.into();
                let value = value.as_ref();
                match Srgb::from_str(value) {
                    Ok(color) => Ok((name, color)),
                    Err(source) => Err(PaletteError::InvalidColor {
                        name,
                        value: value.to_string(),
                        source,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// One of the built-in web color tables.
    pub fn builtin(which: BuiltinPalette) -> Self {
        let (names, colors) = which
            .entries()
            .iter()
            .map(|&(name, [r, g, b])| (name.to_string(), Srgb::from_u8(r, g, b)))
            .unzip();
        Self { names, colors }
    }

    /// Look up a built-in palette by name (`css3`, `css21`, `html4`).
    pub fn builtin_named(name: &str) -> Result<Self, PaletteError> {
        Ok(Self::builtin(name.parse()?))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Color of the entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.colors[idx]
    }

    /// Position of the entry called `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Color of the entry called `name`, if any.
    pub fn get(&self, name: &str) -> Option<Srgb> {
        self.position(name).map(|idx| self.colors[idx])
    }

    /// Entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Srgb)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.colors.iter().copied())
    }
}

impl Default for Palette {
    /// The CSS3 extended color keywords.
    fn default() -> Self {
        Self::builtin(BuiltinPalette::default())
    }
}
