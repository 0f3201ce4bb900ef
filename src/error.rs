//! Error types for rdplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rdplot operations.
pub type Result<T> = std::result::Result<T, RdplotError>;

/// Errors that can occur in rdplot.
#[derive(Debug, Error)]
pub enum RdplotError {
    /// The requested projection axis is not declared by the header.
    #[error("Undefined projection axis: {label} (data has {ndim} axes)")]
    UndefinedProjectionAxis { label: String, ndim: usize },

    /// A time step outside of the recorded sequence was requested.
    #[error("Step {step} out of range: recording has {steps} steps")]
    StepOutOfRange { step: usize, steps: usize },

    /// Declared extents do not match the number of values in a frame.
    #[error(
        "Shape mismatch{}: extents {extents:?} need {expected} values, frame has {actual}",
        .line.map(|line| format!(" (line {line})")).unwrap_or_default()
    )]
    ShapeMismatch {
        extents: Vec<usize>,
        expected: usize,
        actual: usize,
        /// Recording line of the frame, when read from a file.
        line: Option<usize>,
    },

    /// Unrecognised aggregation mode.
    #[error("Unknown aggregation mode: '{0}' (expected sum, average or maximum)")]
    UnknownAggregation(String),

    /// Invalid plot configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An axis label that is not of the form `x_<k>`.
    #[error("Invalid axis label: '{0}'")]
    InvalidAxisLabel(String),

    /// A projection that cannot be applied to this data.
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    /// Data with more than two axes needs a projection to be plotted.
    #[error("{ndim}-dimensional data needs a projection onto one or two axes")]
    ProjectionRequired { ndim: usize },

    /// Frame cannot be interpreted as a greyscale or RGB image.
    #[error("Frame of {len} values is not a {width}x{height} greyscale or RGB image")]
    NotAnImage { len: usize, width: usize, height: usize },

    /// Recording whose parts do not fit together.
    #[error("Invalid recording: {0}")]
    InvalidRecording(String),

    /// The recording has no header line.
    #[error("Missing header (first line)")]
    MissingHeader,

    /// Malformed value in a recording.
    #[error("Parse error (line {line}, column {column}): {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A figure could not be drawn.
    #[error("Render error: {0}")]
    Render(String),

    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RdplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UndefinedProjectionAxis error.
    pub fn undefined_axis(label: impl Into<String>, ndim: usize) -> Self {
        Self::UndefinedProjectionAxis {
            label: label.into(),
            ndim,
        }
    }

    /// Create a StepOutOfRange error.
    pub fn step_out_of_range(step: usize, steps: usize) -> Self {
        Self::StepOutOfRange { step, steps }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
