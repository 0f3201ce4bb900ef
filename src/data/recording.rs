//! In-memory recording: a header plus one flat frame per time step.

use super::Header;
use crate::error::{RdplotError, Result};

/// A loaded recording.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Header declaring the per-axis extents.
    pub header: Header,
    /// Time stamp of each step in milliseconds.
    pub times_ms: Vec<f64>,
    /// Flat row-major frames, one per step.
    pub frames: Vec<Vec<f64>>,
}

impl Recording {
    /// Create a recording, checking every frame against the header.
    pub fn new(header: Header, times_ms: Vec<f64>, frames: Vec<Vec<f64>>) -> Result<Self> {
        if times_ms.len() != frames.len() {
            return Err(RdplotError::InvalidRecording(format!(
                "{} time stamps for {} frames",
                times_ms.len(),
                frames.len()
            )));
        }
        for frame in &frames {
            let expected = header.frame_len();
            if frame.len() != expected {
                return Err(RdplotError::ShapeMismatch {
                    extents: header.extents.clone(),
                    expected,
                    actual: frame.len(),
                    line: None,
                });
            }
        }
        Ok(Self {
            header,
            times_ms,
            frames,
        })
    }

    /// Create a recording whose time stamps are the step indices.
    pub fn from_frames(header: Header, frames: Vec<Vec<f64>>) -> Result<Self> {
        let times_ms = (0..frames.len()).map(|i| i as f64).collect();
        Self::new(header, times_ms, frames)
    }

    /// Number of recorded steps.
    pub fn steps(&self) -> usize {
        self.frames.len()
    }

    /// Dimensionality of a frame.
    pub fn ndim(&self) -> usize {
        self.header.dimension()
    }

    /// Frame at `step`.
    pub fn frame(&self, step: usize) -> Result<&[f64]> {
        self.frames
            .get(step)
            .map(Vec::as_slice)
            .ok_or_else(|| RdplotError::step_out_of_range(step, self.steps()))
    }

    /// Values of a scalar recording, one per step.
    pub fn scalar_series(&self) -> Vec<f64> {
        self.frames
            .iter()
            .filter_map(|frame| frame.first().copied())
            .collect()
    }

    /// Minimum and maximum over all finite values.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        crate::figure::finite_min_max(self.frames.iter().flatten().copied())
    }
}
