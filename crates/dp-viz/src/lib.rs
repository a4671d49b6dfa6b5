//! # dp-viz
//!
//! Visualization data artifacts for distplot.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects).

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bar chart of a probability sequence.
pub mod bar;

pub use bar::{BAR_SCHEMA_VERSION, BarChartArtifact, BarChartMeta};
