//! Evaluation-budget stopping conditions.
//!
//! A stopping condition is reset when a search starts, notified after every
//! fitness evaluation, and polled at the head of each search loop.
//! Cancellation is cooperative: a search never stops mid-evaluation.

use crate::error::{Result, SearchError};
use std::fmt;

/// Gate that decides when a search algorithm must stop.
pub trait StoppingCondition {
    /// Resets the internal state; called once at the start of every search.
    fn notify_search_started(&mut self);

    /// Records one fitness evaluation.
    fn notify_fitness_evaluation(&mut self);

    /// Records `evaluations` fitness evaluations at once.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeEvaluations`] if `evaluations < 0`.
    fn notify_fitness_evaluations(&mut self, evaluations: i64) -> Result<()>;

    /// Whether the search must stop now.
    fn search_must_stop(&self) -> bool;

    /// Fraction of the budget consumed so far.
    fn progress(&self) -> f64;
}

/// Stops after a fixed number of fitness evaluations.
///
/// Before [`notify_search_started`](StoppingCondition::notify_search_started)
/// is called the budget counts as exhausted, so a search that forgets to
/// start the condition stops immediately.
///
/// # Example
///
/// ```
/// use suite_minimizer::stopping::{MaxFitnessEvaluations, StoppingCondition};
///
/// let mut budget = MaxFitnessEvaluations::of(3).unwrap();
/// budget.notify_search_started();
/// budget.notify_fitness_evaluation();
/// budget.notify_fitness_evaluation();
/// assert!(!budget.search_must_stop());
/// budget.notify_fitness_evaluation();
/// assert!(budget.search_must_stop());
/// assert_eq!(budget.progress(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFitnessEvaluations {
    max_evaluations: u64,
    evaluations: Option<u64>,
}

impl MaxFitnessEvaluations {
    /// Creates a budget of `max_evaluations` evaluations.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NonPositiveBudget`] if `max_evaluations <= 0`.
    pub fn of(max_evaluations: i64) -> Result<Self> {
        if max_evaluations <= 0 {
            return Err(SearchError::NonPositiveBudget(max_evaluations));
        }
        Ok(Self {
            max_evaluations: max_evaluations as u64,
            evaluations: None,
        })
    }

    /// The configured budget.
    pub fn max_evaluations(&self) -> u64 {
        self.max_evaluations
    }

    /// Evaluations consumed since the search started, `None` before start.
    pub fn evaluations(&self) -> Option<u64> {
        self.evaluations
    }
}

impl StoppingCondition for MaxFitnessEvaluations {
    fn notify_search_started(&mut self) {
        self.evaluations = Some(0);
    }

    fn notify_fitness_evaluation(&mut self) {
        if let Some(n) = self.evaluations.as_mut() {
            *n += 1;
        }
    }

    fn notify_fitness_evaluations(&mut self, evaluations: i64) -> Result<()> {
        if evaluations < 0 {
            return Err(SearchError::NegativeEvaluations(evaluations));
        }
        if let Some(n) = self.evaluations.as_mut() {
            *n += evaluations as u64;
        }
        Ok(())
    }

    fn search_must_stop(&self) -> bool {
        match self.evaluations {
            Some(n) => n >= self.max_evaluations,
            None => true,
        }
    }

    fn progress(&self) -> f64 {
        match self.evaluations {
            Some(n) => n as f64 / self.max_evaluations as f64,
            None => 1.0,
        }
    }
}

impl fmt::Display for MaxFitnessEvaluations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaxFitnessEvaluations({})", self.max_evaluations)
    }
}
