//! Error type shared by every component of the search engine.
//!
//! All faults are invalid-argument faults raised at construction time.
//! Nothing here is retried: the search is deterministic given valid inputs.

use thiserror::Error;

/// Errors raised when building chromosomes, stopping conditions, or
/// algorithms from invalid arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A chromosome was built from a gene vector with no genes.
    #[error("gene vector must not be empty")]
    EmptyGenes,

    /// The evaluation budget of a stopping condition was zero or negative.
    #[error("fitness evaluations must be positive, got {0}")]
    NonPositiveBudget(i64),

    /// A bulk evaluation notification carried a negative count.
    #[error("negative number of evaluations: {0}")]
    NegativeEvaluations(i64),

    /// An algorithm configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An algorithm name could not be parsed.
    #[error("the algorithm '{0}' is not a valid option")]
    UnknownAlgorithm(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
