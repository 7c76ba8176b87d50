//! Random-search configuration.

use crate::error::{Result, SearchError};

/// Configuration for the random-search baseline.
///
/// # Defaults
///
/// ```
/// use suite_minimizer::random_search::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default();
/// assert_eq!(config.max_evaluations, 1000);
/// assert_eq!(config.singleton_candidates, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Fitness-evaluation budget used by
    /// [`RandomSearch::from_config`](super::RandomSearch::from_config).
    /// [`RandomSearch::new`](super::RandomSearch::new) ignores this field
    /// and runs under the stopping condition it is given.
    pub max_evaluations: i64,

    /// Upper bound on the single-test suites offered to the archive.
    ///
    /// The tests with the highest individual coverage are tried first.
    /// Zero skips the phase.
    pub singleton_candidates: usize,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            singleton_candidates: 20,
        }
    }
}

impl RandomSearchConfig {
    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: i64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the number of single-test candidates.
    pub fn with_singleton_candidates(mut self, k: usize) -> Self {
        self.singleton_candidates = k;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] for a non-positive budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_evaluations <= 0 {
            return Err(SearchError::InvalidConfig(
                "max_evaluations must be positive".into(),
            ));
        }
        Ok(())
    }
}
