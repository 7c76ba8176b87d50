//! Normalized fitness functions over a coverage matrix.
//!
//! The search has two objectives, both normalized to `[0, 1]`:
//!
//! - [`SizeFitness`] (minimizing): selected tests / total tests
//! - [`CoverageFitness`] (maximizing): lines covered by the union of the
//!   selected tests / total lines
//!
//! Both are pure: structurally equal chromosomes always get equal values.

use crate::coverage::CoverageMatrix;
use crate::suite::TestSuiteChromosome;
use std::sync::Arc;

/// A scalar objective over test-suite chromosomes.
pub trait FitnessFunction {
    /// Computes the fitness of `chromosome`.
    ///
    /// Must be deterministic and return a non-negative, non-NaN value.
    fn evaluate(&self, chromosome: &TestSuiteChromosome) -> f64;

    /// Whether lower values are better.
    fn is_minimizing(&self) -> bool;

    /// Whether higher values are better.
    fn is_maximizing(&self) -> bool {
        !self.is_minimizing()
    }

    /// Whether fitness value `a` is strictly better than `b` for this objective.
    fn is_better(&self, a: f64, b: f64) -> bool {
        if self.is_minimizing() {
            a < b
        } else {
            a > b
        }
    }
}

impl<F: FitnessFunction + ?Sized> FitnessFunction for &F {
    fn evaluate(&self, chromosome: &TestSuiteChromosome) -> f64 {
        (**self).evaluate(chromosome)
    }

    fn is_minimizing(&self) -> bool {
        (**self).is_minimizing()
    }
}

/// Normalized suite size, to be minimized.
#[derive(Debug, Clone)]
pub struct SizeFitness {
    matrix: Arc<CoverageMatrix>,
}

impl SizeFitness {
    pub fn new(matrix: Arc<CoverageMatrix>) -> Self {
        Self { matrix }
    }
}

impl FitnessFunction for SizeFitness {
    fn evaluate(&self, chromosome: &TestSuiteChromosome) -> f64 {
        chromosome.num_selected_tests() as f64 / self.matrix.num_tests() as f64
    }

    fn is_minimizing(&self) -> bool {
        true
    }
}

/// Normalized line coverage of the selected tests, to be maximized.
///
/// A matrix without lines has nothing to cover and yields `0.0`.
#[derive(Debug, Clone)]
pub struct CoverageFitness {
    matrix: Arc<CoverageMatrix>,
}

impl CoverageFitness {
    pub fn new(matrix: Arc<CoverageMatrix>) -> Self {
        Self { matrix }
    }
}

impl FitnessFunction for CoverageFitness {
    fn evaluate(&self, chromosome: &TestSuiteChromosome) -> f64 {
        let lines = self.matrix.num_lines();
        if lines == 0 {
            return 0.0;
        }
        let covered = self
            .matrix
            .lines_covered_by_all(chromosome.selected_test_indices());
        covered as f64 / lines as f64
    }

    fn is_minimizing(&self) -> bool {
        false
    }
}

/// The fitness pair of one evaluated chromosome.
///
/// `size` is minimized, `coverage` is maximized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    pub size: f64,
    pub coverage: f64,
}

impl Objectives {
    pub fn new(size: f64, coverage: f64) -> Self {
        Self { size, coverage }
    }

    /// Evaluates both objectives of `chromosome`.
    pub fn evaluate<S, C>(size: &S, coverage: &C, chromosome: &TestSuiteChromosome) -> Self
    where
        S: FitnessFunction + ?Sized,
        C: FitnessFunction + ?Sized,
    {
        let objectives = Self {
            size: size.evaluate(chromosome),
            coverage: coverage.evaluate(chromosome),
        };
        debug_assert!(
            objectives.size >= 0.0 && objectives.coverage >= 0.0,
            "fitness functions must not return negative or NaN values: {objectives:?}"
        );
        objectives
    }
}
