//! MatchEngine -- the primary entry point for the crate.
//!
//! [`MatchEngine`] owns a palette indexed in every supported color space and
//! runs the decode, summarize, convert, lookup and threshold steps for each
//! request.

use super::error::MatchError;
use super::request::MatchRequest;
use crate::color::{Color, ColorSpace, Srgb};
use crate::palette::{Nearest, Palette, PaletteIndex};
use crate::summarize::ImageBuffer;

/// Outcome of a match that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The nearest entry is within the distance limit.
    Match { name: String, distance: f64 },
    /// The nearest entry is farther than `max_distance`.
    NoMatch { max_distance: f64, nearest: Nearest },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }

    /// Name of the matched entry, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            MatchOutcome::Match { name, .. } => Some(name),
            MatchOutcome::NoMatch { .. } => None,
        }
    }

    /// Distance to the nearest entry, whether or not it was accepted.
    pub fn distance(&self) -> f64 {
        match self {
            MatchOutcome::Match { distance, .. } => *distance,
            MatchOutcome::NoMatch { nearest, .. } => nearest.distance,
        }
    }
}

/// Matches images and colors against a fixed palette.
///
/// The palette is indexed in sRGB and Lab once, at construction. All query
/// methods take `&self` and nothing is mutated afterwards, so one engine can
/// serve any number of threads.
///
/// # Example
///
/// ```
/// use color_match::{Color, ColorSpace, MatchEngine, MatchOutcome, Palette, Srgb};
///
/// let palette = Palette::from_hex([("black", "#000000"), ("white", "#ffffff")]).unwrap();
/// let engine = MatchEngine::new(palette).unwrap();
///
/// let outcome = engine
///     .match_color(Color::from(Srgb::new(0.95, 0.95, 0.95)), ColorSpace::Srgb, 0.2)
///     .unwrap();
/// assert_eq!(outcome.name(), Some("white"));
///
/// let outcome = engine
///     .match_color(Color::from(Srgb::new(0.5, 0.5, 0.5)), ColorSpace::Srgb, 0.2)
///     .unwrap();
/// assert!(matches!(outcome, MatchOutcome::NoMatch { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct MatchEngine {
    srgb: PaletteIndex,
    lab: PaletteIndex,
}

impl MatchEngine {
    /// Index `palette` in every supported space.
    pub fn new(palette: Palette) -> Result<Self, MatchError> {
        let srgb = PaletteIndex::build(&palette, ColorSpace::Srgb)?;
        let lab = PaletteIndex::build(&palette, ColorSpace::Lab)?;
        tracing::debug!(entries = palette.len(), "palette indexed");
        Ok(Self { srgb, lab })
    }

    pub fn palette(&self) -> &Palette {
        self.srgb.palette()
    }

    /// The index searched for queries in `space`.
    pub fn index(&self, space: ColorSpace) -> &PaletteIndex {
        match space {
            ColorSpace::Srgb => &self.srgb,
            ColorSpace::Lab => &self.lab,
        }
    }

    /// Decode `bytes` and reduce the image to one color, as `request` says.
    pub fn summarize(&self, bytes: &[u8], request: &MatchRequest) -> Result<Srgb, MatchError> {
        let image = ImageBuffer::decode(bytes, request.get_resize_to())?;
        let summary = request.get_summarizer().summarize(&image)?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            summarizer = %request.get_summarizer(),
            summary = %summary,
            "image summarized"
        );
        Ok(summary)
    }

    /// Run the full pipeline on encoded image bytes.
    ///
    /// # Errors
    ///
    /// - the distance limit is negative or NaN
    ///   ([`MatchError::InvalidParameter`])
    /// - the bytes are not a supported image ([`MatchError::Decode`])
    /// - an invalid summarizer or resize parameter
    pub fn match_bytes(
        &self,
        bytes: &[u8],
        request: &MatchRequest,
    ) -> Result<MatchOutcome, MatchError> {
        let max_distance = request.effective_max_distance();
        validate_max_distance(max_distance)?;

        let summary = self.summarize(bytes, request)?;
        self.match_color(Color::from(summary), request.get_space(), max_distance)
    }

    /// Match an already known color in `space`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidParameter`] when `max_distance` is
    /// negative or NaN, or when the color has a non-finite channel. An
    /// infinite `max_distance` accepts the nearest entry unconditionally.
    pub fn match_color(
        &self,
        color: Color,
        space: ColorSpace,
        max_distance: f64,
    ) -> Result<MatchOutcome, MatchError> {
        validate_max_distance(max_distance)?;
        if !color.components().iter().all(|c| c.is_finite()) {
            return Err(MatchError::InvalidParameter(format!(
                "color {:?} has a non-finite channel",
                color.components()
            )));
        }

        let nearest = self.index(space).nearest(color);
        tracing::debug!(
            space = %space,
            name = %nearest.name,
            distance = nearest.distance,
            max_distance,
            "nearest palette entry"
        );

        if nearest.distance > max_distance {
            Ok(MatchOutcome::NoMatch {
                max_distance,
                nearest,
            })
        } else {
            Ok(MatchOutcome::Match {
                name: nearest.name,
                distance: nearest.distance,
            })
        }
    }
}

/// Any non-negative limit is valid, including infinity ("always match").
fn validate_max_distance(max_distance: f64) -> Result<(), MatchError> {
    // NaN fails the comparison
    if max_distance >= 0.0 {
        Ok(())
    } else {
        Err(MatchError::InvalidParameter(format!(
            "maximum distance must be a non-negative number, got {max_distance}"
        )))
    }
}
