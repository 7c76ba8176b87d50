//! Fast non-dominated sorting and crowding distance (NSGA-II utilities).

use super::dominance::{dominance_cmp, Dominance};
use crate::fitness::Objectives;
use std::cmp::Ordering;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, Default)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Assigns a Pareto rank to each solution based on dominance relationships
/// (size minimized, coverage maximized).
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance; record for every `p`
///    how many solutions dominate it and which solutions it dominates
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Releasing each member of the current front decrements the counters of
///    the solutions it dominates; those reaching zero form the next front
/// 4. Stop when a produced front is empty
///
/// Every index appears in exactly one front. An empty input yields no fronts.
///
/// # Complexity
///
/// O(n²) comparisons, n = number of solutions
///
/// # Example
///
/// ```
/// use suite_minimizer::fitness::Objectives;
/// use suite_minimizer::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     Objectives::new(0.1, 0.5), // A
///     Objectives::new(0.3, 0.7), // B
///     Objectives::new(0.5, 0.9), // C
///     Objectives::new(0.4, 0.6), // D, dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives);
///
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort(objectives: &[Objectives]) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&objectives[i], &objectives[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // All pairs involving i have been seen by now.
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = &fronts[fronts.len() - 1];
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance of each member of one front (mutually
/// non-dominated solutions). Higher distance means the solution is more
/// isolated in objective space.
///
/// Fronts with at most two members get `f64::INFINITY` everywhere. For
/// larger fronts the boundary solutions of each objective get infinity.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective (size, then coverage):
/// 1. Stable-sort solutions by objective value
/// 2. Assign infinity to the first and last solution
/// 3. Interior solution `i` accumulates `(v[i+1] − v[i−1]) / (max − min)`,
///    skipped when the range is zero
///
/// # Complexity
///
/// O(n log n), n = front size
///
/// # Example
///
/// ```
/// use suite_minimizer::fitness::Objectives;
/// use suite_minimizer::pareto::crowding_distance;
///
/// let front = vec![
///     Objectives::new(0.1, 0.2),
///     Objectives::new(0.2, 0.5),
///     Objectives::new(0.5, 0.9),
/// ];
///
/// let distances = crowding_distance(&front);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!(distances[1].is_finite());
/// ```
pub fn crowding_distance(front: &[Objectives]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0f64; n];
    let objectives: [fn(&Objectives) -> f64; 2] = [|o| o.size, |o| o.coverage];

    for value in objectives {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            value(&front[a])
                .partial_cmp(&value(&front[b]))
                .unwrap_or(Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(&front[indices[n - 1]]) - value(&front[indices[0]]);
        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = value(&front[indices[i - 1]]);
                let next = value(&front[indices[i + 1]]);
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::dominates;
    use proptest::prelude::*;

    fn objs(points: &[(f64, f64)]) -> Vec<Objectives> {
        points.iter().map(|&(s, c)| Objectives::new(s, c)).collect()
    }

    // ---- Non-dominated sort ----

    #[test]
    fn test_empty_population() {
        let result = non_dominated_sort(&[]);
        assert!(result.ranks.is_empty());
        assert!(result.fronts.is_empty());
    }

    #[test]
    fn test_single_solution() {
        let result = non_dominated_sort(&objs(&[(0.5, 0.5)]));
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_two_non_dominated() {
        let result = non_dominated_sort(&objs(&[(0.2, 0.3), (0.6, 0.9)]));
        assert_eq!(result.ranks, vec![0, 0]);
        assert_eq!(result.fronts.len(), 1);
    }

    #[test]
    fn test_clear_dominance_chain() {
        let result = non_dominated_sort(&objs(&[(0.6, 0.2), (0.2, 0.8), (0.4, 0.5)]));
        assert_eq!(result.ranks, vec![2, 0, 1]);
        assert_eq!(result.fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let result = non_dominated_sort(&objs(&[
            (0.1, 0.3), // front 0
            (0.3, 0.6), // front 0
            (0.5, 0.9), // front 0
            (0.4, 0.5), // dominated by (0.3, 0.6) → front 1
            (0.6, 0.4), // dominated by (0.4, 0.5) → front 2
        ]));
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_all_equal() {
        let result = non_dominated_sort(&objs(&[(0.5, 0.5); 4]));
        assert!(result.ranks.iter().all(|&r| r == 0));
        assert_eq!(result.fronts.len(), 1);
    }

    // ---- Crowding distance ----

    #[test]
    fn test_crowding_small_fronts() {
        assert!(crowding_distance(&[]).is_empty());
        assert!(crowding_distance(&objs(&[(0.1, 0.1)]))[0].is_infinite());
        let two = crowding_distance(&objs(&[(0.1, 0.1), (0.9, 0.9)]));
        assert!(two.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        let dist = crowding_distance(&objs(&[
            (0.0, 0.0),
            (0.25, 0.25),
            (0.5, 0.5),
            (0.75, 0.75),
            (1.0, 1.0),
        ]));
        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());
        for d in &dist[1..4] {
            assert!((d - 1.0).abs() < 1e-10, "expected 0.5 + 0.5, got {d}");
        }
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        // Equal coverage everywhere: only size contributes.
        let dist = crowding_distance(&objs(&[(0.1, 0.5), (0.2, 0.5), (0.4, 0.5)]));
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        assert!((dist[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sort_then_distance() {
        let all = objs(&[(0.1, 0.3), (0.3, 0.6), (0.5, 0.9), (0.4, 0.5), (0.6, 0.4)]);
        let sorted = non_dominated_sort(&all);
        let front_0: Vec<Objectives> = sorted.fronts[0].iter().map(|&i| all[i]).collect();
        let dist = crowding_distance(&front_0);
        assert_eq!(dist.len(), 3);
        assert!(dist[1].is_finite());
    }

    proptest! {
        #[test]
        fn prop_fronts_partition_population(
            points in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..40)
        ) {
            let all = objs(&points);
            let result = non_dominated_sort(&all);

            let mut seen = vec![0usize; all.len()];
            for (rank, front) in result.fronts.iter().enumerate() {
                prop_assert!(!front.is_empty());
                for &i in front {
                    seen[i] += 1;
                    prop_assert_eq!(result.ranks[i], rank);
                }
            }
            prop_assert!(seen.iter().all(|&c| c == 1));
        }

        #[test]
        fn prop_front_zero_is_exactly_undominated(
            points in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..40)
        ) {
            let all = objs(&points);
            let result = non_dominated_sort(&all);
            for i in 0..all.len() {
                let undominated = all.iter().all(|o| !dominates(o, &all[i]));
                prop_assert_eq!(undominated, result.ranks[i] == 0);
            }
        }

        #[test]
        fn prop_crowding_boundaries_infinite(
            points in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 3..30)
        ) {
            let front = objs(&points);
            let dist = crowding_distance(&front);
            let min_size = front.iter().map(|o| o.size).fold(f64::INFINITY, f64::min);
            let max_cov = front.iter().map(|o| o.coverage).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(dist.iter().filter(|d| d.is_infinite()).count() >= 2);
            prop_assert!(front
                .iter()
                .zip(&dist)
                .any(|(o, d)| o.size == min_size && d.is_infinite()));
            prop_assert!(front
                .iter()
                .zip(&dist)
                .any(|(o, d)| o.coverage == max_cov && d.is_infinite()));
        }
    }
}
