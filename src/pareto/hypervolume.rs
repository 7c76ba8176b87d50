//! Two-dimensional hyper-volume indicator.

use crate::fitness::FitnessFunction;
use crate::suite::TestSuiteChromosome;
use std::cmp::Ordering;

/// Hyper-volume of a front of test suites.
///
/// Each chromosome is mapped to the point `(f1, f2)`; `(r1, r2)` is the
/// reference point. Both fitness functions must produce values normalized
/// to `[0, 1]`, so the result lies in `[0, 1]` as well. For the usual
/// setting pass coverage as `f1`, size as `f2` and the worst point
/// `(0.0, 1.0)` as reference.
///
/// See [`hyper_volume_of_points`] for the sweep itself.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use suite_minimizer::coverage::CoverageMatrix;
/// use suite_minimizer::fitness::{CoverageFitness, SizeFitness};
/// use suite_minimizer::pareto::hyper_volume;
/// use suite_minimizer::suite::TestSuiteChromosome;
///
/// let matrix = Arc::new(CoverageMatrix::from_rows(vec![
///     vec![true, false],
///     vec![true, true],
/// ]));
/// let coverage = CoverageFitness::new(matrix.clone());
/// let size = SizeFitness::new(matrix);
///
/// let front = vec![TestSuiteChromosome::singleton(2, 1)];
/// let hv = hyper_volume(&front, &coverage, &size, 0.0, 1.0);
/// assert!((hv - 0.5).abs() < 1e-12);
/// ```
pub fn hyper_volume<F1, F2>(
    front: &[TestSuiteChromosome],
    f1: &F1,
    f2: &F2,
    r1: f64,
    r2: f64,
) -> f64
where
    F1: FitnessFunction + ?Sized,
    F2: FitnessFunction + ?Sized,
{
    let points: Vec<(f64, f64)> = front
        .iter()
        .map(|c| (f1.evaluate(c), f2.evaluate(c)))
        .collect();
    hyper_volume_of_points(&points, r1, r2)
}

/// Hyper-volume of raw `(f1, f2)` points w.r.t. the reference `(r1, r2)`.
///
/// `f1` is maximized and `f2` minimized; the input is assumed to be
/// mutually non-dominated.
///
/// # Algorithm
///
/// 1. Sort points ascending by `f1`
/// 2. Sweep left to right: each point adds the rectangle of width
///    `f1 − previous f1` (starting at `r1`) and height `r2 − f2`
/// 3. Only rectangles with positive width and height contribute
///
/// An empty front has hyper-volume `0.0`.
///
/// # Complexity
///
/// O(n log n)
///
/// # Example
///
/// ```
/// use suite_minimizer::pareto::hyper_volume_of_points;
///
/// assert_eq!(hyper_volume_of_points(&[], 0.0, 1.0), 0.0);
/// let hv = hyper_volume_of_points(&[(0.6, 0.4)], 0.0, 1.0);
/// assert!((hv - 0.36).abs() < 1e-12);
/// ```
pub fn hyper_volume_of_points(points: &[(f64, f64)], r1: f64, r2: f64) -> f64 {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut volume = 0.0;
    let mut prev_f1 = r1;
    for &(f1, f2) in &sorted {
        let width = f1 - prev_f1;
        let height = r2 - f2;
        if width > 0.0 && height > 0.0 {
            volume += width * height;
        }
        prev_f1 = f1;
    }
    volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageMatrix;
    use crate::fitness::{CoverageFitness, Objectives, SizeFitness};
    use crate::pareto::ParetoArchive;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn archived_points(archive: &ParetoArchive<()>) -> Vec<(f64, f64)> {
        archive.iter().map(|(_, o)| (o.coverage, o.size)).collect()
    }

    #[test]
    fn test_empty_front() {
        assert_eq!(hyper_volume_of_points(&[], 0.0, 1.0), 0.0);
        let matrix = Arc::new(CoverageMatrix::from_rows(vec![vec![true]]));
        let hv = hyper_volume(
            &[],
            &CoverageFitness::new(matrix.clone()),
            &SizeFitness::new(matrix),
            0.0,
            1.0,
        );
        assert_eq!(hv, 0.0);
    }

    #[test]
    fn test_single_point() {
        let hv = hyper_volume_of_points(&[(0.6, 0.4)], 0.0, 1.0);
        assert!((hv - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_staircase() {
        // Sorted by coverage: (0.5, 0.2), (1.0, 0.6)
        // 0.5 * 0.8 + 0.5 * 0.4 = 0.6
        let hv = hyper_volume_of_points(&[(1.0, 0.6), (0.5, 0.2)], 0.0, 1.0);
        assert!((hv - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_point_at_reference_contributes_nothing() {
        assert_eq!(hyper_volume_of_points(&[(0.0, 0.5)], 0.0, 1.0), 0.0);
        assert_eq!(hyper_volume_of_points(&[(0.8, 1.0)], 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_full_coverage_single_test() {
        let matrix = Arc::new(CoverageMatrix::from_rows(vec![
            vec![true, true],
            vec![true, false],
            vec![false, true],
            vec![false, false],
        ]));
        let front = vec![TestSuiteChromosome::singleton(4, 0)];
        let hv = hyper_volume(
            &front,
            &CoverageFitness::new(matrix.clone()),
            &SizeFitness::new(matrix),
            0.0,
            1.0,
        );
        assert!((hv - 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_hyper_volume_monotone_under_archive_growth(
            points in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..60)
        ) {
            let mut archive = ParetoArchive::new();
            let mut previous = 0.0;
            for (size, coverage) in points {
                archive.insert((), Objectives::new(size, coverage));
                let hv = hyper_volume_of_points(&archived_points(&archive), 0.0, 1.0);
                prop_assert!((0.0..=1.0).contains(&hv));
                prop_assert!(hv >= previous - 1e-12, "{} < {}", hv, previous);
                previous = hv;
            }
        }
    }
}
