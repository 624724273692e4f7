//! Summarization strategy selection.

use std::fmt;
use std::str::FromStr;

use super::error::{ParseSummarizerError, SummarizeError};
use super::image_buffer::ImageBuffer;
use super::kmeans::{dominant, KmeansOptions};
use super::mean::mean;
use crate::color::Srgb;

/// How an image is reduced to a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Summarizer {
    /// Per-channel arithmetic mean of all pixels.
    #[default]
    Mean,
    /// Centroid of the largest k-means cluster.
    Dominant(KmeansOptions),
}

impl Summarizer {
    /// Lowercase identifier used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Summarizer::Mean => "mean",
            Summarizer::Dominant(_) => "kmeans",
        }
    }

    /// Reduce `image` to one color.
    pub fn summarize(&self, image: &ImageBuffer) -> Result<Srgb, SummarizeError> {
        match self {
            Summarizer::Mean => Ok(mean(image)),
            Summarizer::Dominant(options) => dominant(image, options),
        }
    }
}

impl fmt::Display for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summarizer::Mean => f.write_str("mean"),
            Summarizer::Dominant(options) => write!(f, "kmeans(k={})", options.clusters),
        }
    }
}

impl FromStr for Summarizer {
    type Err = ParseSummarizerError;

    /// Parses `mean` or `kmeans` (also `k-means`, `dominant`). The k-means
    /// variant starts from [`KmeansOptions::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" | "average" => Ok(Summarizer::Mean),
            "kmeans" | "k-means" | "dominant" => Ok(Summarizer::Dominant(KmeansOptions::default())),
            _ => Err(ParseSummarizerError(s.to_string())),
        }
    }
}
