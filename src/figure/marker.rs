//! Marker highlighting one time slice of a time-course figure.

use super::PlotStyle;

/// Opacity of the plane marker on 3D figures.
pub const PLANE_ALPHA: f64 = 0.25;

/// Spacing of the plane outline along the position axis.
const OUTLINE_SPACING: f64 = 0.1;

/// Marker drawn at one step of a time course.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeMarker {
    /// Vertical line at the step (line and heatmap styles).
    Line {
        /// Marked step.
        step: usize,
        /// Line colour.
        color: String,
    },
    /// Translucent plane through the step (wireframe and surface styles).
    Plane {
        /// Marked step.
        step: usize,
        /// Outline as `(position, value)` points.
        outline: Vec<(f64, f64)>,
        /// Fill colour.
        color: String,
        /// Fill opacity.
        alpha: f64,
    },
}

impl TimeMarker {
    /// Marked step.
    pub fn step(&self) -> usize {
        match self {
            Self::Line { step, .. } | Self::Plane { step, .. } => *step,
        }
    }
}

/// Build the marker for `step`.
///
/// `columns` is the number of positions per step and `range` the value range
/// of the marked data; the plane outline runs along the minimum with both ends
/// raised to the maximum.
pub fn time_marker(
    step: usize,
    style: PlotStyle,
    columns: usize,
    range: (f64, f64),
    color: &str,
) -> TimeMarker {
    if !style.is_3d() {
        return TimeMarker::Line {
            step,
            color: color.to_string(),
        };
    }

    let (min, max) = range;
    let points = (columns as f64 / OUTLINE_SPACING).round() as usize;
    let mut outline: Vec<(f64, f64)> = (0..points)
        .map(|i| (i as f64 * OUTLINE_SPACING, min))
        .collect();
    if let Some(first) = outline.first_mut() {
        first.1 = max;
    }
    if let Some(last) = outline.last_mut() {
        last.1 = max;
    }

    TimeMarker::Plane {
        step,
        outline,
        color: color.to_string(),
        alpha: PLANE_ALPHA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_styles_get_a_line() {
        for style in [PlotStyle::Line, PlotStyle::Heatmap] {
            let marker = time_marker(4, style, 10, (0.0, 1.0), "#FF9600");
            assert_eq!(
                marker,
                TimeMarker::Line {
                    step: 4,
                    color: "#FF9600".to_string()
                }
            );
        }
    }

    #[test]
    fn plane_spans_columns_and_value_range() {
        let marker = time_marker(2, PlotStyle::Surface, 3, (-1.0, 5.0), "red");
        let TimeMarker::Plane { step, outline, alpha, .. } = marker else {
            panic!("expected a plane");
        };
        assert_eq!(step, 2);
        assert_eq!(alpha, PLANE_ALPHA);
        assert_eq!(outline.len(), 30);
        assert_eq!(outline[0], (0.0, 5.0));
        assert_eq!(outline[1].1, -1.0);
        assert_eq!(outline[29].1, 5.0);
        assert!((outline[29].0 - 2.9).abs() < 1e-9);
    }
}
