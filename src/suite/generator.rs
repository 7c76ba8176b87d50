//! Random creation of initial test suites.

use super::chromosome::TestSuiteChromosome;
use rand::Rng;

/// Creates random chromosomes for population initialization.
pub trait ChromosomeGenerator {
    /// Creates one random, valid chromosome.
    fn generate<R: Rng>(&self, rng: &mut R) -> TestSuiteChromosome;
}

/// Generates suites with a size distribution biased towards small suites.
///
/// A target size `k = 1 + floor(r² · (n − 1))` is drawn for `r` uniform in
/// `[0, 1)`, then `k` distinct tests are picked by a partial Fisher–Yates
/// shuffle. Squaring `r` puts most of the mass on small suites while still
/// reaching the full suite occasionally.
///
/// # Example
///
/// ```
/// use suite_minimizer::random::create_rng;
/// use suite_minimizer::suite::{ChromosomeGenerator, TestSuiteChromosomeGenerator};
///
/// let generator = TestSuiteChromosomeGenerator::new(10);
/// let mut rng = create_rng(42);
/// let suite = generator.generate(&mut rng);
/// assert_eq!(suite.len(), 10);
/// assert!(suite.num_selected_tests() >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSuiteChromosomeGenerator {
    num_tests: usize,
}

impl TestSuiteChromosomeGenerator {
    /// Creates a generator for suites over `num_tests` tests.
    ///
    /// # Panics
    /// Panics if `num_tests` is zero.
    pub fn new(num_tests: usize) -> Self {
        assert!(num_tests > 0, "num_tests must be at least 1");
        Self { num_tests }
    }

    /// Number of genes of generated chromosomes.
    pub fn num_tests(&self) -> usize {
        self.num_tests
    }
}

impl ChromosomeGenerator for TestSuiteChromosomeGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> TestSuiteChromosome {
        TestSuiteChromosome::repaired(sample_biased_genes(self.num_tests, rng), rng)
    }
}

/// Draws a gene vector with `1 + floor(r² · (n − 1))` distinct genes set.
pub(crate) fn sample_biased_genes<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    let r: f64 = rng.random();
    let k = 1 + (r * r * (n - 1) as f64).floor() as usize;

    let mut genes = vec![false; n];
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.random_range(i..n);
        pool.swap(i, j);
        genes[pool[i]] = true;
    }
    genes
}
