//! Per-request matching parameters.

use crate::color::ColorSpace;
use crate::summarize::{KmeansOptions, Summarizer, DEFAULT_RESIZE};

/// Parameters of one [`MatchEngine::match_bytes`](crate::MatchEngine::match_bytes) call.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - The distance limit defaults per space, see
///   [`ColorSpace::default_max_distance`]
/// - Validation happens when the request is run, not when it is built
///
/// # Example
///
/// ```
/// use color_match::{ColorSpace, MatchRequest, Summarizer};
///
/// let request = MatchRequest::new()
///     .space(ColorSpace::Lab)
///     .summarizer("kmeans".parse::<Summarizer>().unwrap())
///     .seed(Some(7));
///
/// assert_eq!(request.effective_max_distance(), 20.0);
/// assert_eq!(request.get_resize_to(), Some(200));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchRequest {
    space: ColorSpace,
    summarizer: Summarizer,
    resize_to: Resize,
    max_distance: Option<f64>,
}

/// Wrapper so that `Default` yields the standard working resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Resize(Option<u32>);

impl Default for Resize {
    fn default() -> Self {
        Resize(Some(DEFAULT_RESIZE))
    }
}

impl MatchRequest {
    /// sRGB, mean summarizer, 200x200 working resolution, per-space limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the space the palette is searched in.
    #[inline]
    pub fn space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Set the summarization strategy.
    #[inline]
    pub fn summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Use the dominant-cluster summarizer with `clusters` clusters.
    ///
    /// Keeps the seed and iteration limit of an already selected k-means
    /// summarizer.
    pub fn clusters(mut self, clusters: usize) -> Self {
        let options = match self.summarizer {
            Summarizer::Dominant(options) => options,
            Summarizer::Mean => KmeansOptions::default(),
        };
        self.summarizer = Summarizer::Dominant(options.clusters(clusters));
        self
    }

    /// Seed for the k-means summarizer. Ignored by the mean summarizer.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        if let Summarizer::Dominant(options) = self.summarizer {
            self.summarizer = Summarizer::Dominant(options.seed(seed));
        }
        self
    }

    /// Set the working resolution: `Some(n)` resamples to `n x n`, `None`
    /// keeps the decoded size.
    #[inline]
    pub fn resize_to(mut self, resize_to: Option<u32>) -> Self {
        self.resize_to = Resize(resize_to);
        self
    }

    /// Set an explicit distance limit.
    #[inline]
    pub fn max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    pub fn get_space(&self) -> ColorSpace {
        self.space
    }

    pub fn get_summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn get_resize_to(&self) -> Option<u32> {
        self.resize_to.0
    }

    /// The explicit limit, or the default of the selected space.
    pub fn effective_max_distance(&self) -> f64 {
        self.max_distance
            .unwrap_or_else(|| self.space.default_max_distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = MatchRequest::new();
        assert_eq!(request.get_space(), ColorSpace::Srgb);
        assert_eq!(request.get_summarizer(), &Summarizer::Mean);
        assert_eq!(request.get_resize_to(), Some(200));
        assert_eq!(request.effective_max_distance(), 0.2);
    }

    #[test]
    fn test_max_distance_follows_space() {
        let request = MatchRequest::new().space(ColorSpace::Lab);
        assert_eq!(request.effective_max_distance(), 20.0);

        let request = request.max_distance(5.0);
        assert_eq!(request.effective_max_distance(), 5.0);
    }

    #[test]
    fn test_clusters_and_seed() {
        // Seed is ignored until a k-means summarizer is selected
        let request = MatchRequest::new().seed(Some(1));
        assert_eq!(request.get_summarizer(), &Summarizer::Mean);

        let request = request.clusters(3).seed(Some(1)).clusters(4);
        assert_eq!(
            request.get_summarizer(),
            &Summarizer::Dominant(KmeansOptions {
                clusters: 4,
                max_iterations: 10,
                seed: Some(1),
            })
        );
    }

    #[test]
    fn test_no_resize() {
        let request = MatchRequest::new().resize_to(None);
        assert_eq!(request.get_resize_to(), None);
    }
}
