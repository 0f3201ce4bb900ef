//! Building figures from a recording.

use super::{decode_image, time_marker, AxisLabels, Figure, FigureContent, PlotMode, PlotStyle};
use crate::data::Recording;
use crate::error::{RdplotError, Result};
use crate::projection::{project, project_2d, Aggregation, AxisLabel, Grid, ProjectionChoice};
use crate::util::PlotConfig;
use ndarray::Array2;

/// Everything needed to turn a recording into figures.
#[derive(Debug, Clone, Default)]
pub struct PlotRequest {
    /// Drawing style.
    pub style: PlotStyle,
    /// Axes to keep.
    pub projection: ProjectionChoice,
    /// Aggregation for eliminated axes.
    pub method: Aggregation,
    /// Axis labels.
    pub labels: AxisLabels,
    /// Figure title.
    pub title: Option<String>,
    /// Appearance.
    pub config: PlotConfig,
}

impl PlotRequest {
    fn figure(
        &self,
        mode: PlotMode,
        step: Option<usize>,
        content: FigureContent,
        (row_axis, col_axis): (Option<AxisLabel>, Option<AxisLabel>),
    ) -> Figure {
        let color_range = match self.style {
            PlotStyle::Heatmap => content.value_range().map(|(min, max)| {
                (
                    self.config.vmin.unwrap_or(min),
                    self.config.vmax.unwrap_or(max),
                )
            }),
            _ => None,
        };

        Figure {
            title: self.title.clone(),
            mode,
            style: self.style,
            step,
            projection: self.projection,
            method: self.method,
            row_axis,
            col_axis,
            content,
            labels: self.labels.clone(),
            color_range,
            marker: None,
            config: self.config.clone(),
        }
    }
}

/// Figure of the frame at `step`.
pub fn plot_snapshot(recording: &Recording, step: usize, request: &PlotRequest) -> Result<Figure> {
    snapshot(recording, step, request, PlotMode::Snapshot)
}

/// One snapshot figure per step `start + i * step_size`, for `count` steps.
pub fn plot_snapshot_sequence(
    recording: &Recording,
    request: &PlotRequest,
    start: usize,
    step_size: usize,
    count: usize,
) -> Result<Vec<Figure>> {
    tracing::debug!(start, step_size, count, "planning snapshot sequence");
    (0..count)
        .map(|i| snapshot(recording, start + i * step_size, request, PlotMode::SnapshotSequence))
        .collect()
}

fn snapshot(recording: &Recording, step: usize, request: &PlotRequest, mode: PlotMode) -> Result<Figure> {
    let frame = recording.frame(step)?;
    let header = &recording.header;
    let ndim = recording.ndim();
    let mut axes = (None, None);

    let content = if request.style == PlotStyle::Image {
        FigureContent::Image(decode_image(header, frame)?)
    } else if ndim <= 1 {
        axes.1 = (ndim == 1).then(|| AxisLabel::from_index(0));
        FigureContent::Line(frame.to_vec())
    } else {
        match request.projection {
            ProjectionChoice::Pair(first, second) => {
                let p = project_2d(step, &recording.frames, header, (first, second), request.method)?;
                axes = (Some(p.row_axis), Some(p.col_axis));
                FigureContent::Grid(p.grid)
            }
            ProjectionChoice::Single(axis) => {
                let grid = project(&recording.frames[step..=step], header, axis, request.method)?;
                axes.1 = Some(axis);
                FigureContent::Line(grid.z.row(0).to_vec())
            }
            ProjectionChoice::None if ndim == 2 => {
                header.check_frame_len(frame.len())?;
                let rows = header.extents[1];
                let cols = header.extents[0];
                let z = Array2::from_shape_vec((rows, cols), frame.to_vec())
                    .map_err(|e| RdplotError::InvalidProjection(e.to_string()))?;
                axes = (Some(AxisLabel::from_index(1)), Some(AxisLabel::from_index(0)));
                FigureContent::Grid(Grid::from_values(z))
            }
            ProjectionChoice::None => return Err(RdplotError::ProjectionRequired { ndim }),
        }
    };

    Ok(request.figure(mode, Some(step), content, axes))
}

/// Figure of all steps, optionally marking `marker_step`.
pub fn plot_time_course(
    recording: &Recording,
    request: &PlotRequest,
    marker_step: Option<usize>,
) -> Result<Figure> {
    let header = &recording.header;
    let ndim = recording.ndim();
    let steps = recording.steps();
    // Rows of a time course are steps
    let mut col_axis = None;

    if request.style == PlotStyle::Image {
        return Err(RdplotError::InvalidConfig(
            "image style only applies to snapshots".to_string(),
        ));
    }

    let content = match ndim {
        0 => FigureContent::Line(recording.scalar_series()),
        1 => {
            let cols = header.extents[0];
            col_axis = Some(AxisLabel::from_index(0));
            let mut z = Array2::<f64>::zeros((steps, cols));
            for (mut row, frame) in z.rows_mut().into_iter().zip(&recording.frames) {
                header.check_frame_len(frame.len())?;
                row.assign(&ndarray::aview1(frame));
            }
            FigureContent::Grid(Grid::from_values(z))
        }
        _ => match request.projection {
            ProjectionChoice::Single(axis) => {
                col_axis = Some(axis);
                FigureContent::Grid(project(&recording.frames, header, axis, request.method)?)
            }
            ProjectionChoice::Pair(..) => {
                return Err(RdplotError::InvalidProjection(
                    "a time course keeps exactly one axis".to_string(),
                ))
            }
            ProjectionChoice::None => return Err(RdplotError::ProjectionRequired { ndim }),
        },
    };

    let marker = marker_step
        .map(|step| {
            if step >= steps {
                return Err(RdplotError::step_out_of_range(step, steps));
            }
            let range = content.value_range().unwrap_or((0.0, 0.0));
            Ok(time_marker(
                step,
                request.style,
                content.columns(),
                range,
                &request.config.marker_color,
            ))
        })
        .transpose()?;

    let mut figure = request.figure(PlotMode::TimeCourse, None, content, (None, col_axis));
    figure.marker = marker;
    Ok(figure)
}
