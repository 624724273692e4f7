//! Palette types and nearest-color lookup
//!
//! This module provides the named reference palette, the built-in web color
//! tables, and [`PaletteIndex`], the static spatial index used to resolve an
//! arbitrary color to its closest named entry.

mod error;
mod index;
mod kdtree;
mod named;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use index::{Nearest, PaletteIndex};
pub use named::BuiltinPalette;
pub use palette::Palette;
