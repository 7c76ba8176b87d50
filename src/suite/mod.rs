//! Test-suite encoding and its genetic operators.
//!
//! A candidate solution is a [`TestSuiteChromosome`]: one boolean gene per
//! test of the coverage matrix. Algorithms never construct chromosomes
//! directly; they receive them from a [`ChromosomeGenerator`] and derive new
//! ones through [`Mutation`] and [`Crossover`] strategies.
//!
//! # Key Types
//!
//! - [`TestSuiteChromosome`]: non-empty selection of tests, plain value type
//! - [`TestSuiteChromosomeGenerator`]: random suites biased towards small sizes
//! - [`BitFlipMutation`], [`SinglePointCrossover`]: the default operators

mod chromosome;
mod generator;
pub mod operators;

pub use chromosome::TestSuiteChromosome;
pub use generator::{ChromosomeGenerator, TestSuiteChromosomeGenerator};
pub(crate) use generator::sample_biased_genes;
pub use operators::{
    BitFlipMutation, Crossover, IdentityCrossover, IdentityMutation, Mutation,
    SinglePointCrossover,
};
