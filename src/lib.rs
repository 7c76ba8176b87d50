//! Bi-objective test-suite minimization.
//!
//! Given a coverage matrix (which test covers which source line), searches
//! for test suites that trade off two objectives: the normalized number of
//! selected tests (minimized) and the normalized line coverage (maximized).
//! The result of a search is an approximation of the Pareto front.
//!
//! - **NSGA-II**: Elitist generational GA with non-dominated sorting,
//!   crowding distance and binary tournament selection.
//! - **Random search**: Baseline that feeds the full suite, greedy coverage
//!   prefixes, strong single tests and size-biased random suites into an
//!   exact Pareto archive.
//! - **Hyper-volume**: Two-dimensional quality indicator for comparing
//!   fronts.
//!
//! # Architecture
//!
//! Everything is single-threaded and deterministic given the caller's
//! random number generator. Algorithms are generic over their operators
//! ([`suite::Mutation`], [`suite::Crossover`],
//! [`suite::ChromosomeGenerator`]) and their budget
//! ([`stopping::StoppingCondition`]). The crate logs through the `log`
//! facade and never installs a logger.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use suite_minimizer::algorithm::{AlgorithmBuilder, SearchAlgorithm, SearchAlgorithmKind};
//! use suite_minimizer::coverage::CoverageMatrix;
//! use suite_minimizer::pareto::hyper_volume;
//! use suite_minimizer::random::create_rng;
//!
//! let matrix = Arc::new(CoverageMatrix::from_rows(vec![
//!     vec![true, false, false],
//!     vec![false, true, true],
//!     vec![true, true, false],
//! ]));
//! let builder = AlgorithmBuilder::new(matrix, 100);
//! let mut search = builder.build(SearchAlgorithmKind::RandomSearch).unwrap();
//! let front = search.solve(&mut create_rng(7));
//!
//! let hv = hyper_volume(
//!     &front,
//!     builder.coverage_fitness(),
//!     builder.size_fitness(),
//!     0.0,
//!     1.0,
//! );
//! assert!(hv > 0.0);
//! ```

pub mod algorithm;
pub mod coverage;
pub mod error;
pub mod fitness;
pub mod nsga2;
pub mod pareto;
pub mod random;
pub mod random_search;
pub mod selection;
pub mod stopping;
pub mod suite;

pub use error::{Result, SearchError};
