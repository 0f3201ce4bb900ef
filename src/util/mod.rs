//! Utility types.
//!
//! This module provides the plot appearance configuration shared by the
//! figure planner and the command line.

mod plot_config;

pub use plot_config::{LineStyle, PlotConfig, DEFAULT_COLOR};
