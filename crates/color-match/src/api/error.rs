//! Unified error type for the color-match public API.
//!
//! [`MatchError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::color::ParseSpaceError;
use crate::palette::PaletteError;
use crate::summarize::{ParseSummarizerError, SummarizeError};

/// Unified error type for the color-match public API.
///
/// A query that finds no entry within the distance limit is not an error;
/// it is reported as [`MatchOutcome::NoMatch`](crate::MatchOutcome::NoMatch).
///
/// # Example
///
/// ```
/// use color_match::{MatchEngine, MatchError, Palette};
///
/// fn engine() -> Result<MatchEngine, MatchError> {
///     let palette = Palette::from_hex([("black", "#000000"), ("white", "#ffffff")])?;
///     MatchEngine::new(palette)
/// }
/// assert!(engine().is_ok());
/// ```
#[derive(Debug, Error)]
pub enum MatchError {
    /// Palette validation error (empty, duplicate name, or parse error)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// The bytes are not an image in a supported format
    #[error("could not parse image: {0}")]
    Decode(#[source] image::ImageError),
    /// The decoded image has no pixels
    #[error("image has no pixels")]
    EmptyImage,
    /// A request parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A color space name was not recognised
    #[error(transparent)]
    UnknownColorSpace(#[from] ParseSpaceError),
    /// A summarizer name was not recognised
    #[error(transparent)]
    UnknownSummarizer(#[from] ParseSummarizerError),
}

impl From<SummarizeError> for MatchError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Decode(source) => MatchError::Decode(source),
            SummarizeError::EmptyImage => MatchError::EmptyImage,
            SummarizeError::InvalidParameter(msg) => MatchError::InvalidParameter(msg),
        }
    }
}
