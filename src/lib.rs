//! rdplot - projection and figure planning for recorded simulation data.
//!
//! Recordings hold one flat N-dimensional frame per time step. rdplot
//! projects them onto one or two axes by summing, averaging or taking the
//! maximum over every other axis, and turns the result into plot-ready
//! figures: snapshots, time courses and snapshot sequences.
//!
//! # Features
//!
//! - Recorded CSV reading (header with per-axis extents, one frame per line)
//! - Single- and dual-axis projection with sum, average or maximum
//! - Projection choices filtered to the data's dimensionality
//! - Line, wireframe, surface, heatmap and image figures with time markers
//! - Figure data export that never overwrites earlier exports
//!
//! # Example
//!
//! ```ignore
//! use rdplot::data::read_recording;
//! use rdplot::projection::{project, Aggregation};
//! use std::path::Path;
//!
//! let recording = read_recording(Path::new("field.csv"))?;
//! let grid = project(
//!     &recording.frames,
//!     &recording.header,
//!     "x_2".parse()?,
//!     Aggregation::Maximum,
//! )?;
//! println!("{} steps x {} positions", grid.rows(), grid.cols());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod figure;
pub mod projection;
pub mod util;

pub use error::{RdplotError, Result};
