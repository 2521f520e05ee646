use crate::basic_types::ColumnIndex;

/// An open sub-interval `(lower, upper)` of integer values which is infeasible for a variable.
///
/// The feasible values adjacent to the hole are [`Hole::last_value_below`] and
/// [`Hole::first_value_above`]. It is the responsibility of whoever produces the hole
/// specification that `lower < upper`; the holes of a single variable are not required to be
/// sorted or disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    pub lower: i64,
    pub upper: i64,
}

impl Hole {
    pub fn new(lower: i64, upper: i64) -> Self {
        Hole { lower, upper }
    }

    /// Returns true if the sampled value `value` lies strictly inside the hole, widened by the
    /// provided tolerance: `lower - 1 + tolerance < value < upper + 1 - tolerance`.
    ///
    /// This is the test applied to candidate incumbent values, which carry numerical noise from
    /// the relaxation solve.
    pub fn contains_value(&self, value: f64, tolerance: f64) -> bool {
        value > self.lower as f64 - 1.0 + tolerance && value < self.upper as f64 + 1.0 - tolerance
    }

    /// Returns true if the proposed bound `bound` lies strictly inside the hole:
    /// `lower - 1 < bound < upper + 1`.
    ///
    /// Unlike [`Hole::contains_value`] no tolerance is applied, since a bound is a value being
    /// set rather than a value being measured.
    pub fn contains_bound(&self, bound: f64) -> bool {
        bound > self.lower as f64 - 1.0 && bound < self.upper as f64 + 1.0
    }

    /// The largest feasible value below the hole.
    pub fn last_value_below(&self) -> f64 {
        self.lower as f64 - 1.0
    }

    /// The smallest feasible value above the hole.
    pub fn first_value_above(&self) -> f64 {
        self.upper as f64 + 1.0
    }
}

/// A variable with one or more holes in its domain.
///
/// The variable is declared by name in the hole specification file; `column` is filled in when
/// the name is resolved against the engine's columns. A [`HoleVariable`] whose name does not
/// match any engine column keeps `column = None` and is ignored by the hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleVariable {
    pub name: String,
    pub domain_lower: i64,
    pub domain_upper: i64,
    pub holes: Vec<Hole>,
    pub column: Option<ColumnIndex>,
}

impl HoleVariable {
    pub fn new(name: String, domain_lower: i64, domain_upper: i64, holes: Vec<Hole>) -> Self {
        HoleVariable {
            name,
            domain_lower,
            domain_upper,
            holes,
            column: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Hole;

    const EPS: f64 = 1e-5;

    #[test]
    fn value_strictly_inside_is_contained() {
        let hole = Hole::new(3, 6);
        assert!(hole.contains_value(4.0, EPS));
        assert!(hole.contains_value(2.5, EPS));
        assert!(hole.contains_value(6.5, EPS));
    }

    #[test]
    fn values_at_the_widened_edges_are_not_contained() {
        let hole = Hole::new(3, 6);
        // The feasible integers 2 and 7 must never be considered inside the hole.
        assert!(!hole.contains_value(2.0, EPS));
        assert!(!hole.contains_value(7.0, EPS));
        // The edge values themselves are excluded by the strict inequality.
        assert!(!hole.contains_value(2.0 + EPS, EPS));
        assert!(!hole.contains_value(7.0 - EPS, EPS));
    }

    #[test]
    fn bound_test_uses_no_tolerance() {
        let hole = Hole::new(3, 6);
        assert!(hole.contains_bound(2.0 + EPS));
        assert!(hole.contains_bound(7.0 - EPS));
        assert!(!hole.contains_bound(2.0));
        assert!(!hole.contains_bound(7.0));
    }

    #[test]
    fn hole_edges() {
        let hole = Hole::new(3, 6);
        assert_eq!(hole.last_value_below(), 2.0);
        assert_eq!(hole.first_value_above(), 7.0);
    }
}
