//! Projection of a whole frame sequence onto one axis.

use super::{reshape_frame, resolve_axis, Aggregation, AxisLabel, Grid};
use crate::data::Header;
use crate::error::{RdplotError, Result};
use ndarray::{Array2, Ix1};

/// Project every frame onto `label`, collapsing all other axes with `method`.
///
/// The result has one row per step and one column per position along the
/// retained axis; its meshes hold the step and position indices.
pub fn project<F: AsRef<[f64]>>(
    frames: &[F],
    header: &Header,
    label: AxisLabel,
    method: Aggregation,
) -> Result<Grid> {
    let ndim = header.dimension();
    let retained = resolve_axis(header, label)?;
    let steps = frames.len();

    tracing::debug!(%label, %method, steps, ndim, "projecting time course");

    // Reversed layout puts declared axis `retained` at this position
    let start_col = ndim - 1 - retained;
    let mut values: Option<Array2<f64>> = None;

    for (step, frame) in frames.iter().enumerate() {
        let mut array = reshape_frame(header, frame.as_ref())?;
        let mut col = start_col;
        let mut j = 0;

        while array.ndim() > 1 {
            if j != col {
                array = method.reduce(&array, j);
                if j < col {
                    col -= 1;
                }
            } else {
                j += 1;
            }
        }

        let reduced = array
            .into_dimensionality::<Ix1>()
            .map_err(|e| RdplotError::InvalidProjection(e.to_string()))?;

        values
            .get_or_insert_with(|| Array2::zeros((steps, reduced.len())))
            .row_mut(step)
            .assign(&reduced);
    }

    let values = values.unwrap_or_else(|| Array2::zeros((0, header.extents[retained])));
    Ok(Grid::from_values(values))
}
