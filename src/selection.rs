//! Parent selection for NSGA-II.
//!
//! Selection works on population slots: the caller keeps per-slot rank and
//! crowding tables for the current generation and hands them in through a
//! [`CrowdedComparison`].
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;
use std::cmp::Ordering;

/// Crowded-comparison operator over per-slot rank and crowding tables.
///
/// Slot `a` is better than slot `b` when it lies on a lower front, or on
/// the same front with a larger crowding distance.
#[derive(Debug, Clone, Copy)]
pub struct CrowdedComparison<'a> {
    ranks: &'a [usize],
    crowding: &'a [f64],
}

impl<'a> CrowdedComparison<'a> {
    /// # Panics
    /// Panics if the tables have different lengths.
    pub fn new(ranks: &'a [usize], crowding: &'a [f64]) -> Self {
        assert_eq!(
            ranks.len(),
            crowding.len(),
            "rank and crowding tables must have equal length"
        );
        Self { ranks, crowding }
    }

    /// `Greater` when slot `a` is better than slot `b`, `Less` when worse.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.ranks[b].cmp(&self.ranks[a]).then_with(|| {
            self.crowding[a]
                .partial_cmp(&self.crowding[b])
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Binary tournament selection: draw two distinct slots, keep the better.
///
/// On a tie the first draw wins. A single-member population always yields
/// slot 0.
///
/// # Complexity
/// O(1) per selection
///
/// # Panics
/// Panics if `population_len` is zero.
pub fn binary_tournament<R, F>(population_len: usize, compare: F, rng: &mut R) -> usize
where
    R: Rng,
    F: Fn(usize, usize) -> Ordering,
{
    assert!(population_len > 0, "cannot select from empty population");
    if population_len == 1 {
        return 0;
    }

    let first = rng.random_range(0..population_len);
    let mut second = rng.random_range(0..population_len - 1);
    if second >= first {
        second += 1;
    }

    if compare(first, second) == Ordering::Less {
        second
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_lower_rank_wins() {
        let ranks = [0, 1];
        let crowding = [0.0, f64::INFINITY];
        let cmp = CrowdedComparison::new(&ranks, &crowding);
        assert_eq!(cmp.compare(0, 1), Ordering::Greater);
        assert_eq!(cmp.compare(1, 0), Ordering::Less);
    }

    #[test]
    fn test_crowding_breaks_rank_ties() {
        let ranks = [2, 2, 2];
        let crowding = [0.5, f64::INFINITY, 0.5];
        let cmp = CrowdedComparison::new(&ranks, &crowding);
        assert_eq!(cmp.compare(1, 0), Ordering::Greater);
        assert_eq!(cmp.compare(0, 1), Ordering::Less);
        assert_eq!(cmp.compare(0, 2), Ordering::Equal);
    }

    #[test]
    fn test_tournament_draws_distinct_slots() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            // Comparator that panics on a self-comparison.
            let idx = binary_tournament(
                2,
                |a, b| {
                    assert_ne!(a, b, "tournament compared a slot with itself");
                    Ordering::Equal
                },
                &mut rng,
            );
            assert!(idx < 2);
        }
    }

    #[test]
    fn test_tournament_never_picks_worst() {
        // Slot 3 loses every comparison, and with distinct draws it can
        // only be selected against itself, which never happens.
        let ranks = [0, 0, 0, 5];
        let crowding = [1.0, 1.0, 1.0, f64::INFINITY];
        let cmp = CrowdedComparison::new(&ranks, &crowding);
        let mut rng = create_rng(7);
        for _ in 0..2000 {
            let idx = binary_tournament(4, |a, b| cmp.compare(a, b), &mut rng);
            assert_ne!(idx, 3);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let ranks = [3, 2, 0, 1];
        let crowding = [0.0; 4];
        let cmp = CrowdedComparison::new(&ranks, &crowding);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[binary_tournament(4, |a, b| cmp.compare(a, b), &mut rng)] += 1;
        }
        // Best slot wins every tournament it enters: P = 1/2.
        let best = counts[2];
        assert!(best > 4500 && best < 5500, "unexpected best count {best}/{n}");
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(binary_tournament(1, |_, _| Ordering::Less, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        binary_tournament(0, |_, _| Ordering::Equal, &mut rng);
    }
}
