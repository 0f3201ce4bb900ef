//! Projection of a single frame onto two axes.

use super::{reshape_frame, resolve_axis, Aggregation, AxisLabel, Grid};
use crate::data::Header;
use crate::error::{RdplotError, Result};
use ndarray::Ix2;

/// Frame projected onto two axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection2D {
    /// Axis laid out along the grid rows.
    pub row_axis: AxisLabel,
    /// Axis laid out along the grid columns.
    pub col_axis: AxisLabel,
    /// Reduced values and meshes.
    pub grid: Grid,
}

/// Project frame `step` onto the pair `(first, second)`, collapsing all other
/// axes with `method`.
///
/// In the reversed layout the axis with the higher declared index comes
/// first, so it ends up on the rows of the result.
pub fn project_2d<F: AsRef<[f64]>>(
    step: usize,
    frames: &[F],
    header: &Header,
    (first, second): (AxisLabel, AxisLabel),
    method: Aggregation,
) -> Result<Projection2D> {
    let ndim = header.dimension();
    if ndim < 2 {
        return Err(RdplotError::InvalidProjection(format!(
            "cannot keep two axes of {}-dimensional data",
            ndim
        )));
    }
    if first == second {
        return Err(RdplotError::InvalidProjection(format!(
            "axis {} selected twice",
            first
        )));
    }

    let retained = [resolve_axis(header, first)?, resolve_axis(header, second)?];
    let frame = frames
        .get(step)
        .ok_or_else(|| RdplotError::step_out_of_range(step, frames.len()))?;

    tracing::debug!(step, %first, %second, %method, ndim, "projecting snapshot");

    let mut array = reshape_frame(header, frame.as_ref())?;
    let mut cols = retained.map(|axis| ndim - 1 - axis);
    let mut j = 0;

    while array.ndim() > 2 {
        if j != cols[0] && j != cols[1] {
            array = method.reduce(&array, j);
            for col in cols.iter_mut() {
                if j < *col {
                    *col -= 1;
                }
            }
        } else {
            j += 1;
        }
    }

    let values = array
        .into_dimensionality::<Ix2>()
        .map_err(|e| RdplotError::InvalidProjection(e.to_string()))?;

    let (row_axis, col_axis) = if cols[0] < cols[1] {
        (first, second)
    } else {
        (second, first)
    };

    Ok(Projection2D {
        row_axis,
        col_axis,
        grid: Grid::from_values(values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use ndarray::{arr2, Axis};

    fn x(n: usize) -> AxisLabel {
        AxisLabel::from_index(n - 1)
    }

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|v| (v as f64 * 0.37).cos() * 10.0 + v as f64).collect()
    }

    #[test]
    fn two_dimensional_frame_is_reshaped_only() {
        let header = Header::with_extents(vec![2, 3]);
        let frames = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]];
        let p = project_2d(0, &frames, &header, (x(1), x(2)), Aggregation::Sum).unwrap();
        assert_eq!(p.grid.z, arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]));
        assert_eq!(p.row_axis, x(2));
        assert_eq!(p.col_axis, x(1));
    }

    #[test]
    fn keeps_requested_extents() {
        let header = Header::with_extents(vec![2, 3, 4, 5]);
        let frames = vec![ramp(120)];
        let p = project_2d(0, &frames, &header, (x(1), x(3)), Aggregation::Average).unwrap();
        assert_eq!(p.grid.z.dim(), (4, 2));
        assert_eq!(p.row_axis, x(3));
        assert_eq!(p.grid.x1.dim(), (4, 2));

        let p = project_2d(0, &frames, &header, (x(4), x(2)), Aggregation::Average).unwrap();
        assert_eq!(p.grid.z.dim(), (5, 3));
        assert_eq!(p.row_axis, x(4));
    }

    #[test]
    fn further_reduction_matches_direct_projection() {
        let extents = vec![3, 4, 2, 3];
        let header = Header::with_extents(extents.clone());
        let frames = vec![ramp(72), ramp(72).into_iter().rev().collect()];

        for method in [Aggregation::Sum, Aggregation::Average, Aggregation::Maximum] {
            let p = project_2d(1, &frames, &header, (x(2), x(4)), method).unwrap();
            // x_4 is on the rows; collapse them to keep x_2
            let reduced = method.reduce(&p.grid.z.clone().into_dyn(), 0);
            let direct = project(&frames, &header, x(2), method).unwrap();
            for (a, b) in reduced.iter().zip(direct.z.index_axis(Axis(0), 1).iter()) {
                assert!((a - b).abs() < 1e-9, "{method}: {a} != {b}");
            }
        }
    }

    #[test]
    fn step_out_of_range() {
        let header = Header::with_extents(vec![2, 2]);
        let frames = vec![vec![0.0; 4]];
        assert!(matches!(
            project_2d(1, &frames, &header, (x(1), x(2)), Aggregation::Sum),
            Err(RdplotError::StepOutOfRange { step: 1, steps: 1 })
        ));
    }

    #[test]
    fn undefined_and_duplicate_axes() {
        let header = Header::with_extents(vec![2, 2, 2]);
        let frames = vec![vec![0.0; 8]];
        assert!(matches!(
            project_2d(0, &frames, &header, (x(1), x(4)), Aggregation::Sum),
            Err(RdplotError::UndefinedProjectionAxis { .. })
        ));
        assert!(matches!(
            project_2d(0, &frames, &header, (x(2), x(2)), Aggregation::Sum),
            Err(RdplotError::InvalidProjection(_))
        ));
    }

    #[test]
    fn needs_two_axes() {
        let header = Header::with_extents(vec![4]);
        let frames = vec![vec![0.0; 4]];
        assert!(matches!(
            project_2d(0, &frames, &header, (x(1), x(2)), Aggregation::Sum),
            Err(RdplotError::InvalidProjection(_))
        ));
    }
}
