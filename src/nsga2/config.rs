//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds the parameters that control the generational loop.

use crate::error::{Result, SearchError};

/// Configuration for NSGA-II.
///
/// # Defaults
///
/// ```
/// use suite_minimizer::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_evaluations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use suite_minimizer::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(100)
///     .with_max_evaluations(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of individuals in the population (N).
    ///
    /// Each generation creates N offspring and keeps N of the 2N merged
    /// individuals.
    pub population_size: usize,

    /// Fitness-evaluation budget used by [`Nsga2::from_config`](super::Nsga2::from_config).
    ///
    /// Evaluating both objectives of one chromosome costs one unit.
    /// [`Nsga2::new`](super::Nsga2::new) ignores this field and runs under
    /// the stopping condition it is given.
    pub max_evaluations: i64,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_evaluations: 1000,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: i64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(SearchError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_evaluations <= 0 {
            return Err(SearchError::InvalidConfig(
                "max_evaluations must be positive".into(),
            ));
        }
        Ok(())
    }
}
