#![allow(clippy::module_inception)]

//! color-match: name the color of an image
//!
//! This library reduces an image to one representative color and finds the
//! closest entry of a fixed palette of named colors, together with a distance
//! that callers use to reject poor matches.
//!
//! # Quick Start
//!
//! The [`MatchEngine`] is the primary entry point:
//!
//! ```
//! use std::io::Cursor;
//!
//! use color_match::{MatchEngine, MatchOutcome, MatchRequest, Palette};
//! use image::{ImageFormat, Rgb, RgbImage};
//!
//! let mut png = Vec::new();
//! RgbImage::from_pixel(4, 4, Rgb([0, 0, 128]))
//!     .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
//!     .unwrap();
//!
//! let engine = MatchEngine::new(Palette::default()).unwrap();
//! let outcome = engine.match_bytes(&png, &MatchRequest::new()).unwrap();
//!
//! assert_eq!(outcome.name(), Some("navy"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! image bytes
//!     |
//!     v
//! ImageBuffer              (decode, drop alpha, Lanczos3 to 200x200)
//!     |
//!     v
//! Summarizer               (mean, or centroid of largest k-means cluster)
//!     |
//!     v
//! Srgb  ---> Lab           (only when matching in Lab)
//!     |
//!     v
//! PaletteIndex::nearest()  (k-d tree, Euclidean distance)
//!     |
//!     v
//! distance <= limit ?  Match { name, distance }  :  NoMatch { .. }
//! ```
//!
//! # Color Spaces
//!
//! | Space | Distance unit | Default limit |
//! |-------|---------------|---------------|
//! | [`ColorSpace::Srgb`] | channel units, 0 to sqrt(3) | 0.2 |
//! | [`ColorSpace::Lab`] | CIE76 delta E | 20.0 |
//!
//! sRGB distances are cheap and match how palettes are written down. Lab
//! distances track perceived difference more closely, particularly between
//! dark colors, where sRGB exaggerates small differences.
//!
//! Lab values are computed from sRGB through linear RGB and CIE XYZ under
//! the D65 white point, with the exact IEC 61966-2-1 transfer function.
//!
//! # Tie-breaking
//!
//! When two palette entries are equally distant from a query, the one listed
//! first in the palette wins. This holds for aliases with identical colors
//! (`aqua` and `cyan` in the CSS3 table) as well as for genuinely equidistant
//! entries.

pub mod api;
pub mod color;
pub mod palette;
pub mod summarize;


pub use api::{MatchEngine, MatchError, MatchOutcome, MatchRequest};
pub use color::{Color, ColorSpace, Lab, LinearRgb, ParseSpaceError, Srgb, Xyz};
pub use palette::{BuiltinPalette, Nearest, Palette, PaletteError, PaletteIndex, ParseColorError};
pub use summarize::{
    dominant, mean, ImageBuffer, KmeansOptions, ParseSummarizerError, SummarizeError, Summarizer,
    DEFAULT_RESIZE,
};
