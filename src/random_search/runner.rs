//! Phased random search over a Pareto archive.

use super::config::RandomSearchConfig;
use crate::algorithm::SearchAlgorithm;
use crate::coverage::CoverageMatrix;
use crate::error::{Result, SearchError};
use crate::fitness::{CoverageFitness, FitnessFunction, Objectives, SizeFitness};
use crate::pareto::{ArchiveInsert, ParetoArchive};
use crate::stopping::{MaxFitnessEvaluations, StoppingCondition};
use crate::suite::{sample_biased_genes, TestSuiteChromosome};
use log::{debug, trace};
use rand::Rng;
use std::cmp::Reverse;
use std::sync::Arc;

/// Random-search baseline.
///
/// Every candidate costs one evaluation and is offered to a
/// [`ParetoArchive`]. Candidates come from four phases, each run while the
/// budget lasts:
///
/// 1. the suite with every test
/// 2. greedy coverage prefixes: repeatedly add the test covering the most
///    still-uncovered lines (lowest index on ties), offering each prefix,
///    until no test adds coverage or every line is covered
/// 3. single-test suites for the `singleton_candidates` tests with the
///    highest individual coverage (lowest index on ties)
/// 4. size-biased random suites until the budget is exhausted
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use suite_minimizer::coverage::CoverageMatrix;
/// use suite_minimizer::random::create_rng;
/// use suite_minimizer::random_search::{RandomSearch, RandomSearchConfig};
///
/// let matrix = Arc::new(CoverageMatrix::from_rows(vec![
///     vec![true, false],
///     vec![false, true],
///     vec![true, true],
/// ]));
/// let config = RandomSearchConfig::default().with_max_evaluations(15);
/// let mut search = RandomSearch::from_config(matrix, config).unwrap();
/// let front = search.solve(&mut create_rng(42));
///
/// // Test 2 alone covers both lines.
/// assert!(front.iter().any(|c| c.selected_test_indices() == vec![2]));
/// ```
pub struct RandomSearch<S = MaxFitnessEvaluations> {
    config: RandomSearchConfig,
    matrix: Arc<CoverageMatrix>,
    stopping: S,
    size: Box<dyn FitnessFunction>,
    coverage: Box<dyn FitnessFunction>,
}

impl RandomSearch {
    /// Builds a random search with an evaluation budget of
    /// `config.max_evaluations`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyGenes`] for a matrix without tests, or
    /// the validation error of `config`.
    pub fn from_config(matrix: Arc<CoverageMatrix>, config: RandomSearchConfig) -> Result<Self> {
        config.validate()?;
        let stopping = MaxFitnessEvaluations::of(config.max_evaluations)?;
        Self::new(
            config,
            matrix.clone(),
            stopping,
            SizeFitness::new(matrix.clone()),
            CoverageFitness::new(matrix),
        )
    }
}

impl<S: StoppingCondition> RandomSearch<S> {
    /// Builds a random search running under `stopping`.
    ///
    /// The budget is whatever `stopping` enforces; `config.max_evaluations`
    /// is only read by [`RandomSearch::from_config`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyGenes`] for a matrix without tests, or
    /// the validation error of `config`.
    pub fn new<FS, FC>(
        config: RandomSearchConfig,
        matrix: Arc<CoverageMatrix>,
        stopping: S,
        size: FS,
        coverage: FC,
    ) -> Result<Self>
    where
        FS: FitnessFunction + 'static,
        FC: FitnessFunction + 'static,
    {
        if matrix.num_tests() == 0 {
            return Err(SearchError::EmptyGenes);
        }
        config.validate()?;
        Ok(Self {
            config,
            matrix,
            stopping,
            size: Box::new(size),
            coverage: Box::new(coverage),
        })
    }

    pub fn config(&self) -> &RandomSearchConfig {
        &self.config
    }

    /// Runs one search and returns the archive contents in insertion order.
    pub fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome> {
        self.stopping.notify_search_started();
        let num_tests = self.matrix.num_tests();
        let mut archive = ParetoArchive::new();
        debug!("random search started: {num_tests} tests");

        if !self.stopping.search_must_stop() {
            let full = TestSuiteChromosome::repaired(vec![true; num_tests], rng);
            self.offer(&mut archive, full);
        }

        self.greedy_prefixes(&mut archive, rng);
        debug!("greedy phase done: archive size {}", archive.len());

        for test in best_singletons(&self.matrix, self.config.singleton_candidates) {
            if self.stopping.search_must_stop() {
                break;
            }
            self.offer(&mut archive, TestSuiteChromosome::singleton(num_tests, test));
        }
        debug!("singleton phase done: archive size {}", archive.len());

        while !self.stopping.search_must_stop() {
            let suite = TestSuiteChromosome::repaired(sample_biased_genes(num_tests, rng), rng);
            self.offer(&mut archive, suite);
        }

        debug!("random search finished: archive size {}", archive.len());
        archive.into_items()
    }

    fn greedy_prefixes<R: Rng>(
        &mut self,
        archive: &mut ParetoArchive<TestSuiteChromosome>,
        rng: &mut R,
    ) {
        let matrix = Arc::clone(&self.matrix);
        let num_lines = matrix.num_lines();
        let mut covered = vec![false; num_lines];
        let mut selected = vec![false; matrix.num_tests()];
        let mut num_covered = 0;

        while num_covered < num_lines && !self.stopping.search_must_stop() {
            let mut best: Option<(usize, usize)> = None;
            for test in (0..selected.len()).filter(|&t| !selected[t]) {
                let gain = matrix
                    .row(test)
                    .iter()
                    .zip(&covered)
                    .filter(|&(&hit, &done)| hit && !done)
                    .count();
                if best.map_or(true, |(_, g)| gain > g) {
                    best = Some((test, gain));
                }
            }

            let Some((test, gain)) = best.filter(|&(_, g)| g > 0) else {
                break;
            };
            selected[test] = true;
            for (c, &hit) in covered.iter_mut().zip(matrix.row(test)) {
                *c |= hit;
            }
            num_covered += gain;

            let prefix = TestSuiteChromosome::repaired(selected.clone(), rng);
            self.offer(archive, prefix);
        }
    }

    /// Evaluates `suite` (one unit of budget) and offers it to the archive.
    ///
    /// A suite already in the archive still costs its evaluation.
    fn offer(
        &mut self,
        archive: &mut ParetoArchive<TestSuiteChromosome>,
        suite: TestSuiteChromosome,
    ) {
        let objectives = Objectives::evaluate(&*self.size, &*self.coverage, &suite);
        self.stopping.notify_fitness_evaluation();

        match archive.insert_unique(suite, objectives) {
            ArchiveInsert::Inserted { evicted } => trace!(
                "archived size={:.4} coverage={:.4}, evicted {evicted}",
                objectives.size,
                objectives.coverage
            ),
            ArchiveInsert::Dominated => trace!(
                "discarded size={:.4} coverage={:.4}",
                objectives.size,
                objectives.coverage
            ),
            ArchiveInsert::Duplicate => trace!("skipped suite already archived"),
        }
    }
}

impl<S: StoppingCondition> SearchAlgorithm for RandomSearch<S> {
    fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome> {
        RandomSearch::solve(self, rng)
    }

    fn stopping_condition(&self) -> &dyn StoppingCondition {
        &self.stopping
    }
}

/// Up to `k` test indices ordered by descending individual coverage, lower
/// index first among equals.
fn best_singletons(matrix: &CoverageMatrix, k: usize) -> Vec<usize> {
    let mut tests: Vec<usize> = (0..matrix.num_tests()).collect();
    tests.sort_by_key(|&t| Reverse(matrix.lines_covered_by(t)));
    tests.truncate(k);
    tests
}
