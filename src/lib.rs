//! Huematch - name the color of an image
//!
//! Configuration loading, the match service and the JSON response shape
//! used by the `huematch` command-line tool. The numeric core lives in the
//! `color-match` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
