//! Reduction operators collapsing an eliminated axis.

use crate::error::{RdplotError, Result};
use ndarray::{ArrayD, Axis};
use std::fmt;
use std::str::FromStr;

/// How an eliminated axis is collapsed to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Sum along the axis.
    Sum,
    /// Arithmetic mean along the axis.
    #[default]
    Average,
    /// Maximum along the axis.
    Maximum,
}

impl Aggregation {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Average => "average",
            Self::Maximum => "maximum",
        }
    }

    /// Collapse `axis` of `array`, returning an array of one rank less.
    pub fn reduce(self, array: &ArrayD<f64>, axis: usize) -> ArrayD<f64> {
        let axis = Axis(axis);
        match self {
            Self::Sum => array.sum_axis(axis),
            Self::Average => {
                let len = array.len_of(axis) as f64;
                array.sum_axis(axis) / len
            }
            // NaN wins, as in an element-wise maximum
            Self::Maximum => array.fold_axis(axis, f64::NEG_INFINITY, |&acc, &v| {
                if acc.is_nan() || acc >= v {
                    acc
                } else {
                    v
                }
            }),
        }
    }
}

impl FromStr for Aggregation {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "average" => Ok(Self::Average),
            "maximum" => Ok(Self::Maximum),
            _ => Err(RdplotError::UnknownAggregation(s.to_string())),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    fn sample() -> ArrayD<f64> {
        arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).into_dyn()
    }

    #[test]
    fn reduces_along_requested_axis() {
        let a = sample();
        assert_eq!(Aggregation::Sum.reduce(&a, 0).as_slice().unwrap(), &[9.0, 12.0]);
        assert_eq!(Aggregation::Sum.reduce(&a, 1).as_slice().unwrap(), &[3.0, 7.0, 11.0]);
        assert_eq!(Aggregation::Average.reduce(&a, 0).as_slice().unwrap(), &[3.0, 4.0]);
        assert_eq!(Aggregation::Maximum.reduce(&a, 1).as_slice().unwrap(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn maximum_propagates_nan() {
        let a = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, f64::NAN, 3.0]).unwrap();
        assert!(Aggregation::Maximum.reduce(&a, 0).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn unknown_mode_is_a_configuration_error() {
        assert_eq!("Maximum".parse::<Aggregation>().unwrap(), Aggregation::Maximum);
        assert!(matches!(
            "median".parse::<Aggregation>(),
            Err(RdplotError::UnknownAggregation(m)) if m == "median"
        ));
    }
}
