//! Arithmetic mean summarizer.

use super::image_buffer::ImageBuffer;
use crate::color::Srgb;

/// Per-channel arithmetic mean of all pixels.
///
/// Offsets from the first pixel are accumulated instead of raw values, so a
/// uniform image summarizes to exactly its color.
///
/// # Example
///
/// ```
/// use color_match::{mean, ImageBuffer, Srgb};
///
/// let navy = Srgb::from_u8(0, 0, 128);
/// let image = ImageBuffer::from_pixels(vec![navy; 9], 3, 3).unwrap();
/// assert_eq!(mean(&image), navy);
/// ```
pub fn mean(image: &ImageBuffer) -> Srgb {
    let pixels = image.pixels();
    let first = pixels[0];
    let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
    for p in &pixels[1..] {
        r += p.r - first.r;
        g += p.g - first.g;
        b += p.b - first.b;
    }
    let n = pixels.len() as f64;
    Srgb::new(first.r + r / n, first.g + g / n, first.b + b / n)
}
