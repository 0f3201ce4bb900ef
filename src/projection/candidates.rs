//! Projection choices offered for a given dimensionality.

use super::{AxisLabel, ProjectionChoice};

/// Every syntactically valid one- and two-axis choice for `ndim` axes.
pub fn all_candidates(ndim: usize) -> Vec<ProjectionChoice> {
    let singles = (0..ndim).map(|i| ProjectionChoice::Single(AxisLabel::from_index(i)));
    let pairs = (0..ndim).flat_map(|a| {
        (a + 1..ndim).map(move |b| {
            ProjectionChoice::Pair(AxisLabel::from_index(a), AxisLabel::from_index(b))
        })
    });
    singles.chain(pairs).collect()
}

/// Filter `candidates` down to the choices valid for `ndim` axes.
///
/// The default (no projection) choice always comes first, followed by the
/// single-axis choices and then the pairs. Candidates that do not parse or
/// that name an axis beyond `ndim` are dropped.
pub fn build_projection_choices<S: AsRef<str>>(ndim: usize, candidates: &[S]) -> Vec<ProjectionChoice> {
    let parsed: Vec<ProjectionChoice> = candidates
        .iter()
        .filter_map(|c| c.as_ref().parse().ok())
        .collect();

    let mut choices = vec![ProjectionChoice::None];

    for j in 0..=ndim {
        for candidate in &parsed {
            let accept = match *candidate {
                ProjectionChoice::Single(a) => a.number() == j,
                ProjectionChoice::Pair(a, b) => {
                    (a.number() == j || b.number() == j) && a.number() <= ndim && b.number() <= ndim
                }
                ProjectionChoice::None => false,
            };
            if accept && !choices.contains(candidate) {
                choices.push(*candidate);
            }
        }
    }

    // Stable, keeps axis order within each group
    choices.sort_by_key(ProjectionChoice::axis_count);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(choices: &[ProjectionChoice]) -> Vec<String> {
        choices.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn all_candidates_for_three_axes() {
        assert_eq!(
            names(&all_candidates(3)),
            ["x_1", "x_2", "x_3", "x_1, x_2", "x_1, x_3", "x_2, x_3"]
        );
    }

    #[test]
    fn filters_to_current_dimensionality() {
        let candidates = names(&all_candidates(4));
        let choices = build_projection_choices(2, &candidates);
        assert_eq!(names(&choices), ["none", "x_1", "x_2", "x_1, x_2"]);
    }

    #[test]
    fn singles_come_before_pairs() {
        let candidates = ["x_1, x_2", "x_2", "x_1"];
        let choices = build_projection_choices(2, &candidates);
        assert_eq!(names(&choices), ["none", "x_1", "x_2", "x_1, x_2"]);
    }

    #[test]
    fn malformed_and_out_of_range_are_dropped() {
        let candidates = ["x_1", "x_9", "x_1, x_5", "garbage", "x_0, x_1", "x_2,x_3"];
        let choices = build_projection_choices(3, &candidates);
        assert_eq!(names(&choices), ["none", "x_1", "x_2, x_3"]);
    }

    #[test]
    fn zero_dimensional_data_only_offers_default() {
        let choices = build_projection_choices(0, &["x_1", "x_1, x_2"]);
        assert_eq!(choices, vec![ProjectionChoice::None]);
    }
}
