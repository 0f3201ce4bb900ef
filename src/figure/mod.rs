//! Figures: plot-ready data for snapshots, time courses and snapshot sequences.
//!
//! A [`Figure`] is an explicit value owned by the caller. It holds the
//! projected data, the axis labels, the colour range and an optional time
//! marker; [`render_svg`] draws it with `plotters`.

mod export;
mod image;
mod marker;
mod plan;
mod svg;

pub use export::{export_figure, export_path, write_figure_csv, ExportFormat};
pub use image::{decode_image, Image};
pub use marker::{time_marker, TimeMarker, PLANE_ALPHA};
pub use plan::{plot_snapshot, plot_snapshot_sequence, plot_time_course, PlotRequest};
pub use svg::{export_figure_svg, render_svg};

use crate::error::{RdplotError, Result};
use crate::projection::{Aggregation, AxisLabel, Grid, ProjectionChoice};
use crate::util::PlotConfig;
use std::fmt;
use std::str::FromStr;

/// What a figure shows over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// One time step.
    Snapshot,
    /// All time steps at once.
    TimeCourse,
    /// One figure per selected time step.
    SnapshotSequence,
}

impl PlotMode {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::TimeCourse => "time course",
            Self::SnapshotSequence => "snapshot sequence",
        }
    }

    /// Name used in exported file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::TimeCourse => "time_course",
            Self::SnapshotSequence => "snapshot_sequence",
        }
    }
}

/// How a figure is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    /// Line plot.
    #[default]
    Line,
    /// 3D wireframe.
    Wireframe,
    /// 3D surface.
    Surface,
    /// 2D colour map.
    Heatmap,
    /// Raw greyscale or RGB image.
    Image,
}

impl PlotStyle {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Wireframe => "wireframe",
            Self::Surface => "surface",
            Self::Heatmap => "heatmap",
            Self::Image => "image",
        }
    }

    /// Whether the style draws on 3D axes.
    pub fn is_3d(self) -> bool {
        matches!(self, Self::Wireframe | Self::Surface)
    }
}

impl FromStr for PlotStyle {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "line" => Ok(Self::Line),
            "wireframe" => Ok(Self::Wireframe),
            "surface" => Ok(Self::Surface),
            "heatmap" => Ok(Self::Heatmap),
            "image" => Ok(Self::Image),
            other => Err(RdplotError::InvalidConfig(format!("unknown plot style '{}'", other))),
        }
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis labels; for heatmaps the z label names the colour bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisLabels {
    /// Horizontal axis.
    pub x: Option<String>,
    /// Vertical axis.
    pub y: Option<String>,
    /// Depth axis or colour bar.
    pub z: Option<String>,
}

/// Data held by a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureContent {
    /// One value per position.
    Line(Vec<f64>),
    /// Values over a 2D grid.
    Grid(Grid),
    /// Decoded image.
    Image(Image),
}

impl FigureContent {
    /// Minimum and maximum over all finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Line(values) => finite_min_max(values.iter().copied()),
            Self::Grid(grid) => finite_min_max(grid.z.iter().copied()),
            Self::Image(Image::Grey(a)) => finite_min_max(a.iter().copied()),
            Self::Image(Image::Rgb(a)) => finite_min_max(a.iter().map(|&v| f64::from(v))),
        }
    }

    /// Positions per step: grid columns, or 1 for a line.
    pub fn columns(&self) -> usize {
        match self {
            Self::Line(_) => 1,
            Self::Grid(grid) => grid.cols(),
            Self::Image(img) => img.dim().1,
        }
    }
}

/// Plot-ready figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Window or file title.
    pub title: Option<String>,
    /// What the figure shows over time.
    pub mode: PlotMode,
    /// How the figure is meant to be drawn.
    pub style: PlotStyle,
    /// Time step shown by a snapshot.
    pub step: Option<usize>,
    /// Axes kept by the projection.
    pub projection: ProjectionChoice,
    /// Aggregation used for eliminated axes.
    pub method: Aggregation,
    /// Declared axis along the grid rows (`None` for steps or plain lines).
    pub row_axis: Option<AxisLabel>,
    /// Declared axis along the grid columns or the line positions.
    pub col_axis: Option<AxisLabel>,
    /// The data.
    pub content: FigureContent,
    /// Axis labels.
    pub labels: AxisLabels,
    /// Colour range of heatmaps.
    pub color_range: Option<(f64, f64)>,
    /// Marked time slice.
    pub marker: Option<TimeMarker>,
    /// Appearance.
    pub config: PlotConfig,
}

impl Figure {
    /// Label of the colour bar, if the figure has one.
    pub fn colorbar_label(&self) -> Option<&str> {
        match self.style {
            PlotStyle::Heatmap => self.labels.z.as_deref(),
            _ => None,
        }
    }

    /// Whether the vertical axis is drawn top-down.
    pub fn inverts_y_axis(&self) -> bool {
        self.mode == PlotMode::SnapshotSequence
            && matches!(
                self.style,
                PlotStyle::Heatmap | PlotStyle::Surface | PlotStyle::Wireframe
            )
    }
}

/// Minimum and maximum of the finite values in `values`.
pub fn finite_min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
