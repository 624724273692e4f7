//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly two hex digits per channel,
/// optionally prefixed with `#`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of digits after stripping whitespace and '#'
    #[error("invalid hex color length {found} (expected 6 digits)")]
    InvalidLength { found: usize },
    /// Right length, but not all hexadecimal digits
    #[error("invalid hex digits in '{input}'")]
    InvalidHex { input: String },
}

/// Error type for palette validation.
///
/// Palette errors are configuration errors: they are raised while building a
/// palette at startup and are not expected at request time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// The same name appears twice
    #[error("duplicate palette entry '{name}'")]
    DuplicateName { name: String },
    /// An entry's color could not be parsed
    #[error("could not parse palette colour '{name}' = '{value}': {source}")]
    InvalidColor {
        name: String,
        value: String,
        #[source]
        source: ParseColorError,
    },
    /// No built-in palette with that name
    #[error("unknown builtin palette '{0}' (expected css3, css21 or html4)")]
    UnknownBuiltin(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_color_names_entry() {
        let err = PaletteError::InvalidColor {
            name: "bogus".to_string(),
            value: "not-a-hex-color".to_string(),
            source: ParseColorError::InvalidLength { found: 15 },
        };
        assert_eq!(
            err.to_string(),
            "could not parse palette colour 'bogus' = 'not-a-hex-color': \
             invalid hex color length 15 (expected 6 digits)"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
        assert_eq!(
            PaletteError::DuplicateName {
                name: "red".to_string()
            }
            .to_string(),
            "duplicate palette entry 'red'"
        );
        assert_eq!(
            ParseColorError::InvalidHex {
                input: "#GGGGGG".to_string()
            }
            .to_string(),
            "invalid hex digits in '#GGGGGG'"
        );
    }
}
