//! Dominant color via k-means clustering.
//!
//! Pixels are clustered in sRGB. Centroids start at distinct pixel colors
//! picked in random order, are refined by Lloyd iterations, and the centroid
//! of the most populated cluster is the summary.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::SummarizeError;
use super::image_buffer::ImageBuffer;
use crate::color::Srgb;

/// Parameters for [`dominant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmeansOptions {
    /// Requested number of clusters. Reduced to the number of distinct
    /// colors when the image has fewer.
    pub clusters: usize,
    /// Upper bound on refinement passes. Stops earlier once no pixel changes
    /// cluster.
    pub max_iterations: usize,
    /// Seed for choosing initial centroids. `None` seeds from OS entropy on
    /// every call.
    pub seed: Option<u64>,
}

impl Default for KmeansOptions {
    fn default() -> Self {
        Self {
            clusters: 5,
            max_iterations: 10,
            seed: None,
        }
    }
}

impl KmeansOptions {
    pub fn clusters(mut self, clusters: usize) -> Self {
        self.clusters = clusters;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Centroid of the largest k-means cluster of `image`.
///
/// Ties between equally populated clusters go to the lower cluster index.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidParameter`] when `options.clusters` is 0.
pub fn dominant(image: &ImageBuffer, options: &KmeansOptions) -> Result<Srgb, SummarizeError> {
    if options.clusters == 0 {
        return Err(SummarizeError::InvalidParameter(
            "cluster count must be at least 1".to_string(),
        ));
    }

    let pixels = image.pixels();
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut centroids = initial_centroids(pixels, options.clusters, &mut rng);
    let mut assignments = vec![usize::MAX; pixels.len()];

    let mut iterations = 0;
    while iterations < options.max_iterations {
        if !assign(pixels, &centroids, &mut assignments) {
            break;
        }
        update_centroids(pixels, &assignments, &mut centroids);
        iterations += 1;
    }
    assign(pixels, &centroids, &mut assignments);

    let mut counts = vec![0usize; centroids.len()];
    for &cluster in &assignments {
        counts[cluster] += 1;
    }

    let mut best = 0;
    for (cluster, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = cluster;
        }
    }

    tracing::trace!(
        k = centroids.len(),
        iterations,
        largest = counts[best],
        "k-means finished"
    );

    Ok(centroids[best])
}

/// Up to `k` distinct pixel colors in random order.
fn initial_centroids(pixels: &[Srgb], k: usize, rng: &mut StdRng) -> Vec<Srgb> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<Srgb> = pixels
        .iter()
        .copied()
        .filter(|p| seen.insert([p.r.to_bits(), p.g.to_bits(), p.b.to_bits()]))
        .collect();

    let k = k.min(distinct.len());
    let (chosen, _) = distinct.partial_shuffle(rng, k);
    chosen.to_vec()
}

/// Assign every pixel to its nearest centroid. Returns whether any
/// assignment changed.
fn assign(pixels: &[Srgb], centroids: &[Srgb], assignments: &mut [usize]) -> bool {
    let mut changed = false;
    for (pixel, slot) in pixels.iter().zip(assignments.iter_mut()) {
        let mut best = 0;
        let mut best_d2 = f64::INFINITY;
        for (cluster, centroid) in centroids.iter().enumerate() {
            let d2 = squared_distance(*pixel, *centroid);
            if d2 < best_d2 {
                best_d2 = d2;
                best = cluster;
            }
        }
        if *slot != best {
            *slot = best;
            changed = true;
        }
    }
    changed
}

/// Move each centroid to the mean of its members. Empty clusters stay put.
fn update_centroids(pixels: &[Srgb], assignments: &[usize], centroids: &mut [Srgb]) {
    let mut sums = vec![[0.0f64; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (pixel, &cluster) in pixels.iter().zip(assignments) {
        sums[cluster][0] += pixel.r;
        sums[cluster][1] += pixel.g;
        sums[cluster][2] += pixel.b;
        counts[cluster] += 1;
    }

    for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
        if count > 0 {
            let n = count as f64;
            *centroid = Srgb::new(sum[0] / n, sum[1] / n, sum[2] / n);
        }
    }
}

#[inline]
fn squared_distance(a: Srgb, b: Srgb) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> KmeansOptions {
        KmeansOptions::default().seed(Some(seed))
    }

    /// 70% `major`, 30% `minor`, interleaved.
    fn two_tone(major: Srgb, minor: Srgb) -> ImageBuffer {
        let pixels = (0..100)
            .map(|i| if i % 10 < 7 { major } else { minor })
            .collect();
        ImageBuffer::from_pixels(pixels, 10, 10).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = KmeansOptions::default();
        assert_eq!(options.clusters, 5);
        assert_eq!(options.max_iterations, 10);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_uniform_image() {
        let teal = Srgb::from_u8(0, 128, 128);
        let image = ImageBuffer::from_pixels(vec![teal; 400], 20, 20).unwrap();
        for seed in 0..5 {
            let color = dominant(&image, &seeded(seed)).unwrap();
            assert!(color.distance(teal) < 0.01, "seed {seed}: {color}");
        }
        // Unseeded runs agree as well
        let color = dominant(&image, &KmeansOptions::default()).unwrap();
        assert!(color.distance(teal) < 0.01);
    }

    #[test]
    fn test_majority_color_wins() {
        let red = Srgb::new(1.0, 0.0, 0.0);
        let blue = Srgb::new(0.0, 0.0, 1.0);
        let image = two_tone(red, blue);
        for seed in 0..10 {
            let color = dominant(&image, &seeded(seed)).unwrap();
            assert_eq!(color, red, "seed {seed}");
        }
    }

    #[test]
    fn test_noisy_clusters() {
        // Two tight clouds around dark green and light grey, green larger
        let pixels: Vec<Srgb> = (0..600)
            .map(|i| {
                let jitter = (i % 7) as f64 * 0.004;
                if i % 3 == 0 {
                    Srgb::new(0.8 + jitter, 0.8 - jitter, 0.8)
                } else {
                    Srgb::new(0.0 + jitter, 0.4 - jitter, 0.02 + jitter)
                }
            })
            .collect();
        let image = ImageBuffer::from_pixels(pixels, 30, 20).unwrap();
        let color = dominant(&image, &seeded(42).clusters(2)).unwrap();
        assert!(color.distance(Srgb::new(0.012, 0.388, 0.032)) < 0.02, "{color}");
    }

    #[test]
    fn test_seed_is_deterministic() {
        let pixels: Vec<Srgb> = (0..256)
            .map(|i| Srgb::from_u8(i as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
            .collect();
        let image = ImageBuffer::from_pixels(pixels, 16, 16).unwrap();
        let a = dominant(&image, &seeded(1234)).unwrap();
        let b = dominant(&image, &seeded(1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clusters_shrink_to_distinct_colors() {
        let image = two_tone(Srgb::new(1.0, 1.0, 1.0), Srgb::new(0.0, 0.0, 0.0));
        let mut rng = StdRng::seed_from_u64(0);
        let centroids = initial_centroids(image.pixels(), 5, &mut rng);
        assert_eq!(centroids.len(), 2);
        assert_ne!(centroids[0], centroids[1]);

        let color = dominant(&image, &seeded(0).clusters(50)).unwrap();
        assert_eq!(color, Srgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let image = ImageBuffer::from_pixels(vec![Srgb::new(0.0, 0.0, 0.0)], 1, 1).unwrap();
        let result = dominant(&image, &KmeansOptions::default().clusters(0));
        assert!(matches!(result, Err(SummarizeError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_iterations_uses_initial_centroids() {
        let image = two_tone(Srgb::new(0.2, 0.4, 0.6), Srgb::new(0.9, 0.1, 0.1));
        let options = seeded(3).max_iterations(0);
        let color = dominant(&image, &options).unwrap();
        assert_eq!(color, Srgb::new(0.2, 0.4, 0.6));
    }
}
