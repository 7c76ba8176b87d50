//! NSGA-II for bi-objective test-suite minimization.
//!
//! Evolves a population of [`TestSuiteChromosome`](crate::suite::TestSuiteChromosome)s
//! under two objectives: suite size (minimized) and line coverage
//! (maximized). The result is the first non-dominated front of the final
//! population.
//!
//! # Algorithm
//!
//! 1. Generate and evaluate up to N random suites
//! 2. Each generation: rank the population by non-dominated sorting and
//!    crowding distance, pick parents by binary tournament, recombine and
//!    mutate, evaluate N offspring
//! 3. Merge parents and offspring, keep the N best by front and crowding
//! 4. Stop when the evaluation budget is exhausted
//!
//! # Complexity
//!
//! Per generation: O(N²) for the non-dominated sort of the 2N merged
//! individuals, plus O(N·T·L) for the evaluations of N offspring over a
//! T × L coverage matrix.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;

pub use config::Nsga2Config;
pub use runner::Nsga2;
