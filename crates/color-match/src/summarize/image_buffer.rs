//! Decoded pixel grid.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::error::SummarizeError;
use crate::color::Srgb;

/// Default working resolution: images are resampled to 200x200.
pub const DEFAULT_RESIZE: u32 = 200;

/// An image as a row-major grid of normalized sRGB pixels.
///
/// Channels are 8-bit values divided by 255, so a uniform image decodes to
/// exactly the byte value of its color. Alpha is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pixels: Vec<Srgb>,
    width: usize,
    height: usize,
}

impl ImageBuffer {
    /// Decode `bytes` and optionally resample to `n x n`.
    ///
    /// Any format the `image` crate is built with is accepted (PNG, JPEG,
    /// GIF, BMP and WebP). Resampling uses a Lanczos3 filter on the 8-bit
    /// raster and does not preserve the aspect ratio. `None` keeps the
    /// original resolution.
    ///
    /// # Errors
    ///
    /// - `resize_to` is `Some(0)` ([`SummarizeError::InvalidParameter`])
    /// - the bytes are not a supported image ([`SummarizeError::Decode`])
    /// - the image has zero width or height ([`SummarizeError::EmptyImage`])
    pub fn decode(bytes: &[u8], resize_to: Option<u32>) -> Result<Self, SummarizeError> {
        if resize_to == Some(0) {
            return Err(SummarizeError::InvalidParameter(
                "resize target must be at least 1 pixel".to_string(),
            ));
        }
        let decoded = image::load_from_memory(bytes).map_err(SummarizeError::Decode)?;
        Self::from_rgb_image(decoded.to_rgb8(), resize_to)
    }

    /// Build from an already decoded 8-bit RGB raster.
    pub fn from_rgb_image(image: RgbImage, resize_to: Option<u32>) -> Result<Self, SummarizeError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SummarizeError::EmptyImage);
        }

        let image = match resize_to {
            Some(0) => {
                return Err(SummarizeError::InvalidParameter(
                    "resize target must be at least 1 pixel".to_string(),
                ))
            }
            Some(n) if (n, n) != image.dimensions() => {
                imageops::resize(&image, n, n, FilterType::Lanczos3)
            }
            _ => image,
        };

        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| Srgb::from_bytes(p.0)).collect();
        Ok(Self {
            pixels,
            width: width as usize,
            height: height as usize,
        })
    }

    /// Build from normalized pixels in row-major order.
    ///
    /// # Errors
    ///
    /// - no pixels ([`SummarizeError::EmptyImage`])
    /// - `pixels.len() != width * height` ([`SummarizeError::InvalidParameter`])
    pub fn from_pixels(
        pixels: Vec<Srgb>,
        width: usize,
        height: usize,
    ) -> Result<Self, SummarizeError> {
        if pixels.is_empty() || width == 0 || height == 0 {
            return Err(SummarizeError::EmptyImage);
        }
        if pixels.len() != width * height {
            return Err(SummarizeError::InvalidParameter(format!(
                "{} pixels do not fill a {width}x{height} image",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels in row-major order. Never empty.
    #[inline]
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }
}
