//! Nearest named color lookup.

use super::error::PaletteError;
use super::kdtree::KdTree;
use super::palette::Palette;
use crate::color::{Color, ColorSpace};

/// Result of a [`PaletteIndex::nearest`] query.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest {
    /// Position of the entry in the palette.
    pub index: usize,
    /// Name of the entry.
    pub name: String,
    /// Euclidean distance in the index's space (not squared).
    pub distance: f64,
}

/// Spatial index over a palette in one working color space.
///
/// Every palette color is converted into the working space once at build
/// time. The index is immutable afterwards and can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use color_match::{Color, ColorSpace, Palette, PaletteIndex, Srgb};
///
/// let palette = Palette::from_hex([("black", "#000000"), ("white", "#ffffff")]).unwrap();
/// let index = PaletteIndex::build(&palette, ColorSpace::Lab).unwrap();
///
/// let nearest = index.nearest(Color::from(Srgb::new(0.1, 0.1, 0.1)));
/// assert_eq!(nearest.name, "black");
/// ```
#[derive(Debug, Clone)]
pub struct PaletteIndex {
    space: ColorSpace,
    palette: Palette,
    coordinates: Vec<[f64; 3]>,
    tree: KdTree,
}

impl PaletteIndex {
    /// Build an index over `palette` in `space`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if the palette has no entries.
    pub fn build(palette: &Palette, space: ColorSpace) -> Result<Self, PaletteError> {
        let coordinates: Vec<[f64; 3]> = palette
            .iter()
            .map(|(_, srgb)| Color::from(srgb).components_in(space))
            .collect();
        let tree = KdTree::build(coordinates.clone()).ok_or(PaletteError::EmptyPalette)?;

        Ok(Self {
            space,
            palette: palette.clone(),
            coordinates,
            tree,
        })
    }

    /// Working space of this index.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Number of indexed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false for a built index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// The palette this index was built from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Coordinates of entry `idx` in the working space.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn coordinates(&self, idx: usize) -> [f64; 3] {
        self.coordinates[idx]
    }

    /// Closest palette entry to `target`.
    ///
    /// The target is converted into the working space first when it is
    /// expressed in a different one. Equidistant entries resolve to the one
    /// listed first in the palette.
    pub fn nearest(&self, target: Color) -> Nearest {
        let (index, d2) = self.tree.nearest(target.components_in(self.space));
        Nearest {
            index,
            name: self.palette.name(index).to_string(),
            distance: d2.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Lab, Srgb};
    use crate::palette::BuiltinPalette;
    use pretty_assertions::assert_eq;

    fn basic() -> Palette {
        Palette::builtin(BuiltinPalette::Html4)
    }

    #[test]
    fn test_build_and_accessors() {
        let index = PaletteIndex::build(&basic(), ColorSpace::Lab).unwrap();
        assert_eq!(index.space(), ColorSpace::Lab);
        assert_eq!(index.len(), 16);
        assert!(!index.is_empty());
        assert_eq!(index.palette().name(0), "aqua");

        let white = index.palette().position("white").unwrap();
        let [l, a, b] = index.coordinates(white);
        assert!((l - 100.0).abs() < 1e-6);
        assert!(a.abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }

    #[test]
    fn test_exact_match_both_spaces() {
        let palette = Palette::default();
        for space in ColorSpace::ALL {
            let index = PaletteIndex::build(&palette, space).unwrap();
            for (pos, (name, color)) in palette.iter().enumerate() {
                let nearest = index.nearest(Color::from(color));
                assert_eq!(nearest.distance, 0.0, "{name} in {space}");
                // Aliases share a color; the first listed wins
                let first = palette.iter().position(|(_, c)| c == color).unwrap();
                assert_eq!(nearest.index, first, "{name} in {space}");
                assert!(first <= pos);
            }
        }
    }

    #[test]
    fn test_navy_and_teal_distances() {
        let index = PaletteIndex::build(&basic(), ColorSpace::Srgb).unwrap();

        let near_navy = Srgb::new(0.1, 0.1, 0.55);
        let nearest = index.nearest(Color::from(near_navy));
        assert_eq!(nearest.name, "navy");
        let expected = near_navy.distance(Srgb::from_u8(0, 0, 128));
        assert!((nearest.distance - expected).abs() < 1e-12);

        let nearest = index.nearest(Color::from(Srgb::new(0.05, 0.55, 0.45)));
        assert_eq!(nearest.name, "teal");
    }

    #[test]
    fn test_target_converted_into_index_space() {
        let index = PaletteIndex::build(&basic(), ColorSpace::Srgb).unwrap();
        let red_lab = Lab::from(Srgb::new(1.0, 0.0, 0.0));
        let nearest = index.nearest(Color::from(red_lab));
        assert_eq!(nearest.name, "red");
        assert!(nearest.distance < 1e-6);
    }

    #[test]
    fn test_distance_is_not_squared() {
        let palette = Palette::from_hex([("black", "#000000")]).unwrap();
        let index = PaletteIndex::build(&palette, ColorSpace::Srgb).unwrap();
        let nearest = index.nearest(Color::from(Srgb::new(0.3, 0.4, 0.0)));
        assert!((nearest.distance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_equidistant_lowest_position() {
        let palette = Palette::from_hex([("white", "#ffffff"), ("black", "#000000")]).unwrap();
        let index = PaletteIndex::build(&palette, ColorSpace::Srgb).unwrap();
        let nearest = index.nearest(Color::from(Srgb::new(0.5, 0.5, 0.5)));
        assert_eq!(nearest.name, "white");

        let palette = Palette::from_hex([("black", "#000000"), ("white", "#ffffff")]).unwrap();
        let index = PaletteIndex::build(&palette, ColorSpace::Srgb).unwrap();
        let nearest = index.nearest(Color::from(Srgb::new(0.5, 0.5, 0.5)));
        assert_eq!(nearest.name, "black");
    }

    #[test]
    fn test_every_query_gets_a_real_entry() {
        // Single entry, targets far outside the gamut in both spaces
        let palette = Palette::from_hex([("teal", "#008080")]).unwrap();
        for space in ColorSpace::ALL {
            let index = PaletteIndex::build(&palette, space).unwrap();
            for target in [
                Srgb::new(-5.0, 0.0, 0.0),
                Srgb::new(0.0, 10.0, 0.0),
                Srgb::new(1e6, 1e6, 1e6),
            ] {
                let nearest = index.nearest(Color::from(target));
                assert_eq!(nearest.index, 0);
                assert_eq!(nearest.name, "teal");
                assert!(nearest.distance.is_finite(), "{space}: {nearest:?}");
                assert!(nearest.distance > 0.0, "{space}: {nearest:?}");
            }
        }
    }
}
