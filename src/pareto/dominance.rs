//! Pareto dominance between fitness pairs.

use crate::fitness::Objectives;

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Whether `a` dominates `b`: `a` is no larger and covers no less, and is
/// strictly better in at least one of the two.
///
/// The relation is irreflexive and asymmetric.
///
/// # Example
///
/// ```
/// use suite_minimizer::fitness::Objectives;
/// use suite_minimizer::pareto::dominates;
///
/// let small = Objectives::new(0.25, 1.0);
/// let large = Objectives::new(0.50, 1.0);
/// assert!(dominates(&small, &large));
/// assert!(!dominates(&large, &small));
/// assert!(!dominates(&small, &small));
/// ```
pub fn dominates(a: &Objectives, b: &Objectives) -> bool {
    let no_worse = a.size <= b.size && a.coverage >= b.coverage;
    let better = a.size < b.size || a.coverage > b.coverage;
    no_worse && better
}

/// Compares two fitness pairs for Pareto dominance.
pub fn dominance_cmp(a: &Objectives, b: &Objectives) -> Dominance {
    if dominates(a, b) {
        Dominance::Left
    } else if dominates(b, a) {
        Dominance::Right
    } else {
        Dominance::Neither
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strictly_better_in_both() {
        let a = Objectives::new(0.2, 0.9);
        let b = Objectives::new(0.4, 0.5);
        assert!(dominates(&a, &b));
        assert_eq!(dominance_cmp(&a, &b), Dominance::Left);
        assert_eq!(dominance_cmp(&b, &a), Dominance::Right);
    }

    #[test]
    fn test_better_in_one_equal_in_other() {
        let a = Objectives::new(0.2, 0.5);
        let b = Objectives::new(0.2, 0.4);
        assert!(dominates(&a, &b));
        assert!(!dominates(&b, &a));
    }

    #[test]
    fn test_trade_off_is_incomparable() {
        let a = Objectives::new(0.2, 0.4);
        let b = Objectives::new(0.6, 0.9);
        assert_eq!(dominance_cmp(&a, &b), Dominance::Neither);
    }

    #[test]
    fn test_equal_points_do_not_dominate() {
        let a = Objectives::new(0.3, 0.3);
        assert_eq!(dominance_cmp(&a, &a), Dominance::Neither);
    }

    proptest! {
        #[test]
        fn prop_irreflexive(s in 0.0f64..1.0, c in 0.0f64..1.0) {
            let a = Objectives::new(s, c);
            prop_assert!(!dominates(&a, &a));
        }

        #[test]
        fn prop_asymmetric(
            s1 in 0.0f64..1.0, c1 in 0.0f64..1.0,
            s2 in 0.0f64..1.0, c2 in 0.0f64..1.0,
        ) {
            let a = Objectives::new(s1, c1);
            let b = Objectives::new(s2, c2);
            prop_assert!(!(dominates(&a, &b) && dominates(&b, &a)));
        }
    }
}
