//! Axis labels (`x_<k>`) and projection choices.

use crate::error::{RdplotError, Result};
use std::fmt;
use std::str::FromStr;

/// Label naming one axis of the recorded array.
///
/// Labels are 1-indexed in text (`x_1` is the first declared axis) and
/// 0-indexed internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisLabel(usize);

impl AxisLabel {
    /// Label for the 0-indexed axis `index`.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// 0-indexed axis.
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-indexed axis number as written in the label.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl FromStr for AxisLabel {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let number = s
            .strip_prefix("x_")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .ok_or_else(|| RdplotError::InvalidAxisLabel(s.to_string()))?;
        Ok(Self(number - 1))
    }
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{}", self.number())
    }
}

/// Which axes a plot keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionChoice {
    /// No projection; the data is plotted as recorded.
    #[default]
    None,
    /// Keep one axis (1D result).
    Single(AxisLabel),
    /// Keep two axes (2D result).
    Pair(AxisLabel, AxisLabel),
}

impl ProjectionChoice {
    /// Number of retained axes.
    pub fn axis_count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
        }
    }

    /// Retained axes.
    pub fn axes(&self) -> Vec<AxisLabel> {
        match *self {
            Self::None => Vec::new(),
            Self::Single(a) => vec![a],
            Self::Pair(a, b) => vec![a, b],
        }
    }
}

impl FromStr for ProjectionChoice {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [single] => Ok(Self::Single(single.parse()?)),
            [first, second] => Ok(Self::Pair(first.parse()?, second.parse()?)),
            _ => Err(RdplotError::InvalidProjection(format!(
                "'{}' names more than two axes",
                s
            ))),
        }
    }
}

impl fmt::Display for ProjectionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Single(a) => write!(f, "{}", a),
            Self::Pair(a, b) => write!(f, "{}, {}", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_indexed_in_text() {
        let label: AxisLabel = "x_3".parse().unwrap();
        assert_eq!(label.index(), 2);
        assert_eq!(label.number(), 3);
        assert_eq!(label.to_string(), "x_3");
    }

    #[test]
    fn rejects_malformed_labels() {
        for bad in ["x_0", "x3", "y_1", "x_", "x_-1", "x_a"] {
            assert!(bad.parse::<AxisLabel>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn parses_choices() {
        assert_eq!(" ".parse::<ProjectionChoice>().unwrap(), ProjectionChoice::None);
        assert_eq!(
            "x_2".parse::<ProjectionChoice>().unwrap(),
            ProjectionChoice::Single(AxisLabel::from_index(1))
        );
        let pair: ProjectionChoice = "x_1,  x_12".parse().unwrap();
        assert_eq!(
            pair,
            ProjectionChoice::Pair(AxisLabel::from_index(0), AxisLabel::from_index(11))
        );
        assert_eq!(pair.to_string(), "x_1, x_12");
        assert!("x_1, x_2, x_3".parse::<ProjectionChoice>().is_err());
    }

    #[test]
    fn default_choice_is_named_none() {
        assert_eq!(ProjectionChoice::default().to_string(), "none");
        for text in ["", " ", "none", "None"] {
            assert_eq!(text.parse::<ProjectionChoice>().unwrap(), ProjectionChoice::None);
        }
    }
}
