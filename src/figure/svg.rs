//! SVG rendering of figures with `plotters`.
//!
//! Lines are drawn as line charts. Grids and images are drawn as a 2D colour
//! map with one rectangle per cell, rows along the horizontal axis; wireframe
//! and surface figures are shown from above in the same way.

use super::{export_path, finite_min_max, Figure, FigureContent, Image};
use crate::error::{RdplotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const CHART_MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 30;
const Y_LABEL_AREA: u32 = 50;
const CAPTION_FONT: (&str, u32) = ("sans-serif", 20);
const FALLBACK_COLOR: RGBColor = RGBColor(255, 150, 0);
const NAN_COLOR: RGBColor = RGBColor(128, 128, 128);

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Draw `figure` into an SVG file at `path`.
pub fn render_svg(figure: &Figure, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    match &figure.content {
        FigureContent::Line(values) => draw_line(&root, figure, values)?,
        FigureContent::Grid(grid) => {
            let range = color_range(figure);
            draw_cells(&root, figure, grid.rows(), grid.cols(), |r, c| {
                value_color(grid.z[[r, c]], range)
            })?
        }
        FigureContent::Image(Image::Grey(raster)) => {
            let range = color_range(figure);
            let (rows, cols) = raster.dim();
            draw_cells(&root, figure, rows, cols, |r, c| grey_color(raster[[r, c]], range))?
        }
        FigureContent::Image(Image::Rgb(raster)) => {
            let (rows, cols, _) = raster.dim();
            draw_cells(&root, figure, rows, cols, |r, c| {
                RGBColor(raster[[r, c, 0]], raster[[r, c, 1]], raster[[r, c, 2]])
            })?
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Render `figure` to the first free SVG path in `dir`, creating `dir` if needed.
pub fn export_figure_svg(figure: &Figure, dir: &Path, source: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = export_path(dir, source, figure.mode, "svg");
    render_svg(figure, &path)?;

    tracing::info!(path = %path.display(), mode = figure.mode.name(), "rendered figure");
    Ok(path)
}

fn draw_line(root: &Area<'_>, figure: &Figure, values: &[f64]) -> Result<()> {
    let (y_min, y_max) = padded(finite_min_max(values.iter().copied()));
    let x_max = values.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(caption(figure), CAPTION_FONT)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(figure.labels.x.clone().unwrap_or_default())
        .y_desc(figure.labels.y.clone().unwrap_or_default())
        .draw()
        .map_err(render_error)?;

    let color = parse_color(&figure.config.color).unwrap_or(FALLBACK_COLOR);
    chart
        .draw_series(LineSeries::new(
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| (i as f64, v)),
            color.stroke_width(2),
        ))
        .map_err(render_error)?;

    if let Some(marker) = &figure.marker {
        let x = marker.step() as f64;
        chart
            .draw_series(LineSeries::new([(x, y_min), (x, y_max)], &marker_color(figure)))
            .map_err(render_error)?;
    }
    Ok(())
}

fn draw_cells(
    root: &Area<'_>,
    figure: &Figure,
    rows: usize,
    cols: usize,
    color_of: impl Fn(usize, usize) -> RGBColor,
) -> Result<()> {
    let x_max = rows.max(1) as f64;
    let y_max = cols.max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(caption(figure), CAPTION_FONT)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(figure.labels.x.clone().unwrap_or_default())
        .y_desc(figure.labels.y.clone().unwrap_or_default())
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series((0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).map(|(r, c)| {
            let (x, y) = (r as f64, c as f64);
            Rectangle::new([(x, y), (x + 1.0, y + 1.0)], color_of(r, c).filled())
        }))
        .map_err(render_error)?;

    if let Some(marker) = &figure.marker {
        // Centre of the marked row
        let x = marker.step() as f64 + 0.5;
        chart
            .draw_series(LineSeries::new([(x, 0.0), (x, y_max)], &marker_color(figure)))
            .map_err(render_error)?;
    }
    Ok(())
}

fn caption(figure: &Figure) -> String {
    match (&figure.title, figure.step) {
        (Some(title), _) => title.clone(),
        (None, Some(step)) => format!("{} (step {})", figure.mode.name(), step),
        (None, None) => figure.mode.name().to_string(),
    }
}

fn color_range(figure: &Figure) -> (f64, f64) {
    figure
        .color_range
        .or_else(|| figure.content.value_range())
        .unwrap_or((0.0, 1.0))
}

/// Value range widened so that constant data still spans a drawable range.
fn padded(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((min, max)) if max > min => (min, max),
        Some((v, _)) => (v - 0.5, v + 0.5),
        None => (0.0, 1.0),
    }
}

fn marker_color(figure: &Figure) -> RGBColor {
    parse_color(&figure.config.marker_color).unwrap_or(FALLBACK_COLOR)
}

/// Position of `v` within `range`, clamped to `[0, 1]`.
fn normalize(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Diverging blue to yellow to red colour map.
fn value_color(v: f64, range: (f64, f64)) -> RGBColor {
    if !v.is_finite() {
        return NAN_COLOR;
    }
    const STOPS: [(f64, f64, f64); 3] = [(49.0, 54.0, 149.0), (255.0, 255.0, 191.0), (165.0, 0.0, 38.0)];
    let t = normalize(v, range) * 2.0;
    let (from, to, t) = if t <= 1.0 {
        (STOPS[0], STOPS[1], t)
    } else {
        (STOPS[1], STOPS[2], t - 1.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn grey_color(v: f64, range: (f64, f64)) -> RGBColor {
    if !v.is_finite() {
        return NAN_COLOR;
    }
    let level = (normalize(v, range) * 255.0).round() as u8;
    RGBColor(level, level, level)
}

/// Parse a `#rrggbb` colour.
fn parse_color(s: &str) -> Option<RGBColor> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn render_error(e: impl fmt::Display) -> RdplotError {
    RdplotError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Header, Recording};
    use crate::figure::{plot_snapshot, plot_time_course, PlotRequest, PlotStyle};
    use crate::projection::ProjectionChoice;

    fn recording() -> Recording {
        Recording::from_frames(
            Header::with_extents(vec![2, 2]),
            vec![vec![1.0, 2.0, 3.0, 4.5], vec![0.5, f64::NAN, 2.0, 1.0]],
        )
        .unwrap()
    }

    fn request(style: PlotStyle) -> PlotRequest {
        PlotRequest {
            style,
            ..Default::default()
        }
    }

    #[test]
    fn exports_get_numbered_svg_names() {
        let dir = tempfile::tempdir().unwrap();
        let source = Path::new("/data/run.csv");
        let fig = plot_snapshot(&recording(), 0, &request(PlotStyle::Heatmap)).unwrap();

        let first = export_figure_svg(&fig, dir.path(), source).unwrap();
        let second = export_figure_svg(&fig, dir.path(), source).unwrap();
        assert_eq!(first.file_name().unwrap(), "run-snapshot-1.svg");
        assert_eq!(second.file_name().unwrap(), "run-snapshot-2.svg");

        let svg = fs::read_to_string(second).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn line_figure_with_marker_is_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.svg");
        let rec = Recording::from_frames(
            Header::new("Mat", "CV_64F", vec![]),
            vec![vec![0.25], vec![0.5], vec![0.125]],
        )
        .unwrap();
        let req = PlotRequest {
            projection: ProjectionChoice::None,
            ..Default::default()
        };
        let fig = plot_time_course(&rec, &req, Some(1)).unwrap();
        assert!(matches!(fig.content, FigureContent::Line(_)));
        assert!(fig.marker.is_some());

        render_svg(&fig, &path).unwrap();
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("time course"));
    }

    #[test]
    fn constant_and_empty_ranges_are_padded() {
        assert_eq!(padded(Some((2.0, 2.0))), (1.5, 2.5));
        assert_eq!(padded(None), (0.0, 1.0));
        assert_eq!(padded(Some((-1.0, 3.0))), (-1.0, 3.0));
    }

    #[test]
    fn colour_map_spans_blue_to_red() {
        assert_eq!(value_color(0.0, (0.0, 1.0)).rgb(), (49, 54, 149));
        assert_eq!(value_color(1.0, (0.0, 1.0)).rgb(), (165, 0, 38));
        assert_eq!(value_color(0.5, (0.0, 1.0)).rgb(), (255, 255, 191));
        assert_eq!(value_color(f64::NAN, (0.0, 1.0)).rgb(), NAN_COLOR.rgb());
        assert_eq!(grey_color(5.0, (0.0, 1.0)).rgb(), (255, 255, 255));
    }

    #[test]
    fn hex_colours() {
        assert_eq!(parse_color("#FF9600").map(|c| c.rgb()), Some((255, 150, 0)));
        assert!(parse_color("orange").is_none());
        assert!(parse_color("#FF96").is_none());
    }
}
