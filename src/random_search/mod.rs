//! Random-search baseline for test-suite minimization.
//!
//! Combines deterministic seeds (the full suite, greedy coverage prefixes,
//! the strongest single tests) with size-biased random sampling. Every
//! candidate is offered to an exact [`ParetoArchive`](crate::pareto::ParetoArchive),
//! whose final contents are the result.
//!
//! # Complexity
//!
//! Each archive insertion is O(A) for an archive of A members; the greedy
//! phase costs O(T²·L) for a T × L coverage matrix.

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearch;
