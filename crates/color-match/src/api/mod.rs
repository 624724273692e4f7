//! Public API for the color-match crate.
//!
//! This module provides the high-level API: the [`MatchEngine`] that runs the
//! full decode, summarize and lookup pipeline, the [`MatchRequest`] builder
//! and the [`MatchError`] unified error type.

mod engine;
mod error;
mod request;

pub use engine::{MatchEngine, MatchOutcome};
pub use error::MatchError;
pub use request::MatchRequest;
