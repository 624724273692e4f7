//! Error types for image summarization.

use thiserror::Error;

/// Error type for decoding and summarizing an image.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The bytes are not an image in a supported format
    #[error("could not parse image: {0}")]
    Decode(#[source] image::ImageError),
    /// The image has no pixels
    #[error("image has no pixels")]
    EmptyImage,
    /// A summarizer or resize parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Error returned when a summarizer name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown summarizer '{0}' (expected mean or kmeans)")]
pub struct ParseSummarizerError(pub String);
