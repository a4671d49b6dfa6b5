//! # dp-core
//!
//! Core types and traits for distplot.
//!
//! This crate holds the pieces every other crate agrees on:
//! - the error type ([`Error`]) and [`Result`] alias,
//! - evaluation output ([`ProbabilityResult`]),
//! - the [`ProbabilityFunction`] trait implemented by every evaluation method.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, InputError, Result};
pub use traits::ProbabilityFunction;
pub use types::{ProbabilityPoint, ProbabilityResult};

/// distplot version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
