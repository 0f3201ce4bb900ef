//! Appearance configuration carried by every figure.

use crate::error::{RdplotError, Result};
use std::str::FromStr;

/// Default line and wireframe colour.
pub const DEFAULT_COLOR: &str = "#FF9600";

/// Line style for 1D plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Alternating dashes and dots.
    DashDot,
}

impl LineStyle {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::DashDot => "dash dot",
        }
    }
}

impl FromStr for LineStyle {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" | "-" => Ok(Self::Solid),
            "dashed" | "--" => Ok(Self::Dashed),
            "dotted" | ":" => Ok(Self::Dotted),
            "dash dot" | "dashdot" | "-." => Ok(Self::DashDot),
            other => Err(RdplotError::InvalidConfig(format!(
                "unknown line style '{}'",
                other
            ))),
        }
    }
}

/// Plot appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Row/column stride for wireframe and surface plots.
    pub stride: usize,
    /// Edge line width of surface plots.
    pub surface_linewidth: f64,
    /// Style of 1D lines.
    pub line_style: LineStyle,
    /// Line and wireframe colour.
    pub color: String,
    /// Colour of the time-slice marker.
    pub marker_color: String,
    /// Lower end of the heatmap colour range (data minimum if unset).
    pub vmin: Option<f64>,
    /// Upper end of the heatmap colour range (data maximum if unset).
    pub vmax: Option<f64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            stride: 1,
            surface_linewidth: 0.0,
            line_style: LineStyle::Solid,
            color: DEFAULT_COLOR.to_string(),
            marker_color: DEFAULT_COLOR.to_string(),
            vmin: None,
            vmax: None,
        }
    }
}
