//! Image color summarization
//!
//! This module reduces a decoded image to one representative color, either
//! the per-channel mean or the centroid of the largest k-means cluster.

mod error;
mod image_buffer;
mod kmeans;
mod mean;
mod summarizer;

pub use error::{ParseSummarizerError, SummarizeError};
pub use image_buffer::{ImageBuffer, DEFAULT_RESIZE};
pub use kmeans::{dominant, KmeansOptions};
pub use mean::mean;
pub use summarizer::Summarizer;
