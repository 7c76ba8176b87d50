//! Algorithm selection by name.
//!
//! [`AlgorithmBuilder`] turns a coverage matrix, an evaluation budget and a
//! [`SearchAlgorithmKind`] into a ready-to-run [`Algorithm`]. Both searches
//! built by one builder share the same fitness functions.

use crate::coverage::CoverageMatrix;
use crate::error::{Result, SearchError};
use crate::fitness::{CoverageFitness, SizeFitness};
use crate::nsga2::{Nsga2, Nsga2Config};
use crate::random_search::{RandomSearch, RandomSearchConfig};
use crate::stopping::{MaxFitnessEvaluations, StoppingCondition};
use crate::suite::{TestSuiteChromosome, TestSuiteChromosomeGenerator};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Population size of NSGA-II instances built by [`AlgorithmBuilder`].
pub const NSGA2_POPULATION_SIZE: usize = 50;

/// A search that approximates the size/coverage Pareto front.
pub trait SearchAlgorithm {
    /// Runs one search. Resets the stopping condition first.
    fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome>;

    /// The budget gate of this search.
    fn stopping_condition(&self) -> &dyn StoppingCondition;
}

/// The available search algorithms.
///
/// ```
/// use suite_minimizer::algorithm::SearchAlgorithmKind;
///
/// let kind: SearchAlgorithmKind = "nsga2".parse().unwrap();
/// assert_eq!(kind, SearchAlgorithmKind::Nsga2);
/// assert_eq!(SearchAlgorithmKind::RandomSearch.to_string(), "RS");
/// assert!("GA".parse::<SearchAlgorithmKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithmKind {
    /// Phased random search with a Pareto archive (`"RS"`).
    RandomSearch,
    /// NSGA-II (`"NSGA2"`).
    Nsga2,
}

impl SearchAlgorithmKind {
    pub const ALL: [SearchAlgorithmKind; 2] = [Self::RandomSearch, Self::Nsga2];

    /// Short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::RandomSearch => "RS",
            Self::Nsga2 => "NSGA2",
        }
    }
}

impl FromStr for SearchAlgorithmKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for SearchAlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search built by [`AlgorithmBuilder`].
pub enum Algorithm {
    RandomSearch(RandomSearch),
    Nsga2(Nsga2),
}

impl Algorithm {
    pub fn kind(&self) -> SearchAlgorithmKind {
        match self {
            Self::RandomSearch(_) => SearchAlgorithmKind::RandomSearch,
            Self::Nsga2(_) => SearchAlgorithmKind::Nsga2,
        }
    }
}

impl SearchAlgorithm for Algorithm {
    fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome> {
        match self {
            Self::RandomSearch(rs) => rs.solve(rng),
            Self::Nsga2(nsga2) => nsga2.solve(rng),
        }
    }

    fn stopping_condition(&self) -> &dyn StoppingCondition {
        match self {
            Self::RandomSearch(rs) => SearchAlgorithm::stopping_condition(rs),
            Self::Nsga2(nsga2) => SearchAlgorithm::stopping_condition(nsga2),
        }
    }
}

/// Builds searches over one coverage matrix and budget.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use suite_minimizer::algorithm::{AlgorithmBuilder, SearchAlgorithm};
/// use suite_minimizer::coverage::CoverageMatrix;
/// use suite_minimizer::random::create_rng;
///
/// let matrix = Arc::new(CoverageMatrix::from_rows(vec![
///     vec![true, false],
///     vec![false, true],
///     vec![true, true],
/// ]));
/// let builder = AlgorithmBuilder::new(matrix, 200);
/// let mut search = builder.build("NSGA2".parse().unwrap()).unwrap();
/// let front = search.solve(&mut create_rng(1));
/// assert!(!front.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AlgorithmBuilder {
    matrix: Arc<CoverageMatrix>,
    max_evaluations: i64,
    size: SizeFitness,
    coverage: CoverageFitness,
}

impl AlgorithmBuilder {
    pub fn new(matrix: Arc<CoverageMatrix>, max_evaluations: i64) -> Self {
        Self {
            size: SizeFitness::new(matrix.clone()),
            coverage: CoverageFitness::new(matrix.clone()),
            matrix,
            max_evaluations,
        }
    }

    /// The size objective shared by every built search.
    pub fn size_fitness(&self) -> &SizeFitness {
        &self.size
    }

    /// The coverage objective shared by every built search.
    pub fn coverage_fitness(&self) -> &CoverageFitness {
        &self.coverage
    }

    /// Builds a fresh search of the given kind.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyGenes`] if the matrix has no tests
    /// - [`SearchError::NonPositiveBudget`] if the budget is not positive
    pub fn build(&self, kind: SearchAlgorithmKind) -> Result<Algorithm> {
        if self.matrix.num_tests() == 0 {
            return Err(SearchError::EmptyGenes);
        }
        let stopping = MaxFitnessEvaluations::of(self.max_evaluations)?;

        let algorithm = match kind {
            SearchAlgorithmKind::RandomSearch => Algorithm::RandomSearch(RandomSearch::new(
                RandomSearchConfig::default().with_max_evaluations(self.max_evaluations),
                self.matrix.clone(),
                stopping,
                self.size.clone(),
                self.coverage.clone(),
            )?),
            SearchAlgorithmKind::Nsga2 => Algorithm::Nsga2(Nsga2::new(
                Nsga2Config::default()
                    .with_population_size(NSGA2_POPULATION_SIZE)
                    .with_max_evaluations(self.max_evaluations),
                stopping,
                TestSuiteChromosomeGenerator::new(self.matrix.num_tests()),
                self.size.clone(),
                self.coverage.clone(),
            )?),
        };
        log::debug!("built {kind} with budget {}", self.max_evaluations);
        Ok(algorithm)
    }
}
