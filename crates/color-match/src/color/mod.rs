//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the color spaces the matcher works with.
//!
//! # Color Spaces
//!
//! - **Srgb**: Gamma-encoded device RGB. Image pixels and palette entries.
//! - **LinearRgb**: Linear light intensity. Intermediate step only.
//! - **Xyz**: CIE 1931 XYZ relative to the D65 white point.
//! - **Lab**: CIE L\*a\*b\* (D65). Euclidean distance approximates perceived
//!   color difference (delta E 1976).
//!
//! [`Color`] tags a triple with its space so it can be moved into whichever
//! space a palette index works in.
//!
//! # Example
//!
//! ```
//! use color_match::{Lab, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let lab = Lab::from(srgb);
//! let back = Srgb::from(lab);
//!
//! assert!((back.r - srgb.r).abs() < 1e-6);
//! ```

mod gamma;
mod lab;
mod linear_rgb;
mod space;
mod srgb;
mod xyz;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use space::{Color, ColorSpace, ParseSpaceError};
pub use srgb::Srgb;
pub use xyz::Xyz;
