//! Boolean-vector encoding of a candidate test suite.

use crate::error::{Result, SearchError};
use rand::Rng;
use std::fmt;

/// A candidate test suite: gene `i` is `true` when test `i` is included.
///
/// A chromosome always selects at least one test. Constructors repair an
/// all-`false` vector by switching on one uniformly random gene, so every
/// value observable from the outside is a valid, non-empty suite.
///
/// Chromosomes are plain values: equality and hashing are structural, and
/// every operator returns a fresh value that shares no storage with its
/// parents. Copying is [`Clone`].
///
/// # Example
///
/// ```
/// use suite_minimizer::random::create_rng;
/// use suite_minimizer::suite::TestSuiteChromosome;
///
/// let mut rng = create_rng(42);
/// let suite = TestSuiteChromosome::new(vec![false, true, true], &mut rng).unwrap();
/// assert_eq!(suite.selected_test_indices(), vec![1, 2]);
/// assert_eq!(suite.to_string(), "Chromosome(011)");
///
/// let repaired = TestSuiteChromosome::new(vec![false; 4], &mut rng).unwrap();
/// assert_eq!(repaired.num_selected_tests(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TestSuiteChromosome {
    genes: Vec<bool>,
}

impl TestSuiteChromosome {
    /// Builds a chromosome from a gene vector, repairing an empty selection.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyGenes`] if `genes` has no entries.
    pub fn new<R: Rng>(genes: Vec<bool>, rng: &mut R) -> Result<Self> {
        if genes.is_empty() {
            return Err(SearchError::EmptyGenes);
        }
        Ok(Self::repaired(genes, rng))
    }

    /// Builds a chromosome from a non-empty gene vector produced inside the
    /// crate, repairing an empty selection.
    pub(crate) fn repaired<R: Rng>(mut genes: Vec<bool>, rng: &mut R) -> Self {
        debug_assert!(!genes.is_empty(), "gene vector must not be empty");
        if !genes.iter().any(|&g| g) {
            let idx = rng.random_range(0..genes.len());
            genes[idx] = true;
        }
        Self { genes }
    }

    /// The suite containing every test.
    pub fn full(num_tests: usize) -> Result<Self> {
        if num_tests == 0 {
            return Err(SearchError::EmptyGenes);
        }
        Ok(Self {
            genes: vec![true; num_tests],
        })
    }

    /// The suite containing only test `test`.
    ///
    /// # Panics
    /// Panics if `test >= num_tests`.
    pub fn singleton(num_tests: usize, test: usize) -> Self {
        assert!(test < num_tests, "test index {test} out of range 0..{num_tests}");
        let mut genes = vec![false; num_tests];
        genes[test] = true;
        Self { genes }
    }

    /// Number of genes, i.e. the number of tests in the full suite.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: a chromosome has at least one gene.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Borrowed view of the genes.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Owned copy of the genes.
    pub fn to_genes(&self) -> Vec<bool> {
        self.genes.clone()
    }

    /// Whether test `test` is part of the suite.
    pub fn is_selected(&self, test: usize) -> bool {
        self.genes[test]
    }

    /// Indices of the selected tests, ascending.
    pub fn selected_test_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Number of selected tests (not normalized).
    pub fn num_selected_tests(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }
}

impl fmt::Display for TestSuiteChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Chromosome(")?;
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}
