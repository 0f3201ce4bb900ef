//! Recorded data reading and representation.
//!
//! This module handles reading recorded CSV files into a header describing the
//! per-axis extents and a sequence of flat frames, one per time step.

mod header;
mod reader;
mod recording;

pub use header::{get_dimension, Header};
pub use reader::read_recording;
pub use recording::Recording;
