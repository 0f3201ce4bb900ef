//! Axis projection of N-dimensional frames.
//!
//! Frames are reshaped with their axes in reversed declaration order (the last
//! declared axis varies fastest), then every axis that is not retained is
//! collapsed with an [`Aggregation`]. The position of each retained axis is
//! tracked explicitly while the rank shrinks.

mod aggregation;
mod axis;
mod candidates;
mod dual;
mod single;

pub use aggregation::Aggregation;
pub use axis::{AxisLabel, ProjectionChoice};
pub use candidates::{all_candidates, build_projection_choices};
pub use dual::{project_2d, Projection2D};
pub use single::project;

use crate::data::Header;
use crate::error::{RdplotError, Result};
use ndarray::{Array2, ArrayD, IxDyn};

/// Reduced values with `mgrid`-style coordinate meshes of the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Row index of every cell.
    pub x1: Array2<usize>,
    /// Column index of every cell.
    pub x2: Array2<usize>,
    /// Values.
    pub z: Array2<f64>,
}

impl Grid {
    /// Wrap `z` with meshes matching its shape.
    pub fn from_values(z: Array2<f64>) -> Self {
        let (x1, x2) = mgrid(z.nrows(), z.ncols());
        Self { x1, x2, z }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.z.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.z.ncols()
    }
}

/// Coordinate meshes for a `rows x cols` grid: `x1[i, j] = i`, `x2[i, j] = j`.
pub fn mgrid(rows: usize, cols: usize) -> (Array2<usize>, Array2<usize>) {
    (
        Array2::from_shape_fn((rows, cols), |(i, _)| i),
        Array2::from_shape_fn((rows, cols), |(_, j)| j),
    )
}

/// Declared 0-indexed axis named by `label`.
fn resolve_axis(header: &Header, label: AxisLabel) -> Result<usize> {
    (0..header.dimension())
        .find(|&i| i == label.index())
        .ok_or_else(|| RdplotError::undefined_axis(label.to_string(), header.dimension()))
}

/// Reshape a flat frame into the reversed-axis layout.
fn reshape_frame(header: &Header, frame: &[f64]) -> Result<ArrayD<f64>> {
    header.check_frame_len(frame.len())?;
    ArrayD::from_shape_vec(IxDyn(&header.reversed_shape()), frame.to_vec())
        .map_err(|e| RdplotError::InvalidProjection(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mgrid_indexes_rows_and_columns() {
        let (x1, x2) = mgrid(2, 3);
        assert_eq!(x1, ndarray::arr2(&[[0, 0, 0], [1, 1, 1]]));
        assert_eq!(x2, ndarray::arr2(&[[0, 1, 2], [0, 1, 2]]));
    }

    #[test]
    fn unresolved_label_is_an_error() {
        let header = Header::with_extents(vec![2, 3]);
        assert_eq!(resolve_axis(&header, AxisLabel::from_index(1)).unwrap(), 1);
        assert!(matches!(
            resolve_axis(&header, AxisLabel::from_index(2)),
            Err(RdplotError::UndefinedProjectionAxis { ndim: 2, .. })
        ));
    }
}
