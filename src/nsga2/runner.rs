//! NSGA-II generational loop.
//!
//! [`Nsga2`] orchestrates the elitist generational process:
//! initialization → ranking → tournament → crossover → mutation →
//! survivor selection → repeat, until the stopping condition fires.

use super::config::Nsga2Config;
use crate::algorithm::SearchAlgorithm;
use crate::coverage::CoverageMatrix;
use crate::error::{Result, SearchError};
use crate::fitness::{CoverageFitness, FitnessFunction, Objectives, SizeFitness};
use crate::pareto::{crowding_distance, non_dominated_sort};
use crate::selection::{binary_tournament, CrowdedComparison};
use crate::stopping::{MaxFitnessEvaluations, StoppingCondition};
use crate::suite::{
    BitFlipMutation, ChromosomeGenerator, Crossover, Mutation, SinglePointCrossover,
    TestSuiteChromosome, TestSuiteChromosomeGenerator,
};
use log::{debug, trace};
use rand::Rng;
use std::cmp::Ordering;
use std::sync::Arc;

/// An evaluated member of the population.
#[derive(Debug, Clone)]
struct Individual {
    suite: TestSuiteChromosome,
    objectives: Objectives,
}

/// Per-slot rank and crowding tables for one population.
///
/// Slots are positions in the population vector; the tables live only for
/// the generation they were computed in.
struct Ranking {
    ranks: Vec<usize>,
    crowding: Vec<f64>,
    fronts: Vec<Vec<usize>>,
}

impl Ranking {
    fn of(population: &[Individual]) -> Self {
        let objectives: Vec<Objectives> = population.iter().map(|i| i.objectives).collect();
        let sorted = non_dominated_sort(&objectives);

        let mut crowding = vec![0.0; population.len()];
        for front in &sorted.fronts {
            let front_objectives: Vec<Objectives> =
                front.iter().map(|&i| objectives[i]).collect();
            for (&slot, d) in front.iter().zip(crowding_distance(&front_objectives)) {
                crowding[slot] = d;
            }
        }

        Self {
            ranks: sorted.ranks,
            crowding,
            fronts: sorted.fronts,
        }
    }
}

/// NSGA-II over test-suite chromosomes.
///
/// Operators are strategies: the generator, mutation and crossover are type
/// parameters, the two objectives are boxed fitness functions. All
/// randomness comes from the `rng` passed to [`solve`](Self::solve), so a
/// fixed seed, budget and population size reproduce the same front.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use suite_minimizer::coverage::CoverageMatrix;
/// use suite_minimizer::nsga2::{Nsga2, Nsga2Config};
/// use suite_minimizer::random::create_rng;
///
/// let matrix = Arc::new(CoverageMatrix::from_rows(vec![
///     vec![true, false, false],
///     vec![false, true, false],
///     vec![true, true, true],
/// ]));
/// let config = Nsga2Config::default()
///     .with_population_size(10)
///     .with_max_evaluations(200);
///
/// let mut nsga2 = Nsga2::from_config(matrix, config).unwrap();
/// let front = nsga2.solve(&mut create_rng(42));
/// assert!(!front.is_empty());
/// assert!(front.iter().all(|c| c.num_selected_tests() >= 1));
/// ```
pub struct Nsga2<
    S = MaxFitnessEvaluations,
    G = TestSuiteChromosomeGenerator,
    M = BitFlipMutation,
    X = SinglePointCrossover,
> {
    config: Nsga2Config,
    stopping: S,
    generator: G,
    mutation: M,
    crossover: X,
    size: Box<dyn FitnessFunction>,
    coverage: Box<dyn FitnessFunction>,
    generations: usize,
}

impl Nsga2 {
    /// Builds NSGA-II with the default operators and an evaluation budget
    /// of `config.max_evaluations`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyGenes`] for a matrix without tests, or
    /// the validation error of `config`.
    pub fn from_config(matrix: Arc<CoverageMatrix>, config: Nsga2Config) -> Result<Self> {
        if matrix.num_tests() == 0 {
            return Err(SearchError::EmptyGenes);
        }
        config.validate()?;
        let stopping = MaxFitnessEvaluations::of(config.max_evaluations)?;
        let generator = TestSuiteChromosomeGenerator::new(matrix.num_tests());
        Self::new(
            config,
            stopping,
            generator,
            SizeFitness::new(matrix.clone()),
            CoverageFitness::new(matrix),
        )
    }
}

impl<S, G> Nsga2<S, G>
where
    S: StoppingCondition,
    G: ChromosomeGenerator,
{
    /// Builds NSGA-II with bit-flip mutation and single-point crossover.
    ///
    /// The budget is whatever `stopping` enforces; `config.max_evaluations`
    /// is only read by [`Nsga2::from_config`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new<FS, FC>(
        config: Nsga2Config,
        stopping: S,
        generator: G,
        size: FS,
        coverage: FC,
    ) -> Result<Self>
    where
        FS: FitnessFunction + 'static,
        FC: FitnessFunction + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            stopping,
            generator,
            mutation: BitFlipMutation,
            crossover: SinglePointCrossover,
            size: Box::new(size),
            coverage: Box::new(coverage),
            generations: 0,
        })
    }
}

impl<S, G, M, X> Nsga2<S, G, M, X> {
    /// Replaces the mutation operator.
    pub fn with_mutation<M2: Mutation>(self, mutation: M2) -> Nsga2<S, G, M2, X> {
        Nsga2 {
            config: self.config,
            stopping: self.stopping,
            generator: self.generator,
            mutation,
            crossover: self.crossover,
            size: self.size,
            coverage: self.coverage,
            generations: self.generations,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover<X2: Crossover>(self, crossover: X2) -> Nsga2<S, G, M, X2> {
        Nsga2 {
            config: self.config,
            stopping: self.stopping,
            generator: self.generator,
            mutation: self.mutation,
            crossover,
            size: self.size,
            coverage: self.coverage,
            generations: self.generations,
        }
    }

    pub fn config(&self) -> &Nsga2Config {
        &self.config
    }

    /// Number of generations completed by the last [`solve`](Self::solve).
    pub fn last_generations(&self) -> usize {
        self.generations
    }
}

impl<S, G, M, X> Nsga2<S, G, M, X>
where
    S: StoppingCondition,
    G: ChromosomeGenerator,
    M: Mutation,
    X: Crossover,
{
    /// Runs one search and returns the first Pareto front of the final
    /// population.
    ///
    /// The stopping condition is reset at the start, so repeated calls are
    /// independent apart from the state of `rng`.
    pub fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome> {
        self.stopping.notify_search_started();
        self.generations = 0;
        let n = self.config.population_size;
        debug!("NSGA-II started: population size {n}");

        let mut population: Vec<Individual> = Vec::with_capacity(n);
        while population.len() < n && !self.stopping.search_must_stop() {
            let suite = self.generator.generate(rng);
            population.push(self.evaluate(suite));
        }

        while !self.stopping.search_must_stop() {
            let ranking = Ranking::of(&population);
            let crowded = CrowdedComparison::new(&ranking.ranks, &ranking.crowding);

            let mut offspring: Vec<Individual> = Vec::with_capacity(n);
            while offspring.len() < n && !self.stopping.search_must_stop() {
                let p1 = binary_tournament(population.len(), |a, b| crowded.compare(a, b), rng);
                let p2 = binary_tournament(population.len(), |a, b| crowded.compare(a, b), rng);

                let (c1, c2) = self
                    .crossover
                    .crossover(&population[p1].suite, &population[p2].suite, rng);
                let c1 = self.mutation.mutate(&c1, rng);
                let c2 = self.mutation.mutate(&c2, rng);

                offspring.push(self.evaluate(c1));
                if offspring.len() < n {
                    offspring.push(self.evaluate(c2));
                }
            }

            population.extend(offspring);
            population = select_survivors(population, n);
            self.generations += 1;

            trace!(
                "generation {}: progress {:.3}",
                self.generations,
                self.stopping.progress()
            );
        }

        let front = first_front(population);
        debug!(
            "NSGA-II finished after {} generations, front size {}",
            self.generations,
            front.len()
        );
        front
    }

    /// Evaluates both objectives; one unit of budget.
    fn evaluate(&mut self, suite: TestSuiteChromosome) -> Individual {
        let objectives = Objectives::evaluate(&*self.size, &*self.coverage, &suite);
        self.stopping.notify_fitness_evaluation();
        Individual { suite, objectives }
    }
}

impl<S, G, M, X> SearchAlgorithm for Nsga2<S, G, M, X>
where
    S: StoppingCondition,
    G: ChromosomeGenerator,
    M: Mutation,
    X: Crossover,
{
    fn solve<R: Rng>(&mut self, rng: &mut R) -> Vec<TestSuiteChromosome> {
        Nsga2::solve(self, rng)
    }

    fn stopping_condition(&self) -> &dyn StoppingCondition {
        &self.stopping
    }
}

/// Elitist truncation of the merged population to `capacity` individuals.
///
/// Whole fronts are kept while they fit; the front that would overflow is
/// sorted by descending crowding distance and cut to the remaining room.
fn select_survivors(merged: Vec<Individual>, capacity: usize) -> Vec<Individual> {
    let ranking = Ranking::of(&merged);

    let mut keep: Vec<usize> = Vec::with_capacity(capacity);
    for front in &ranking.fronts {
        if keep.len() + front.len() <= capacity {
            keep.extend_from_slice(front);
            continue;
        }

        let mut by_crowding = front.clone();
        by_crowding.sort_by(|&a, &b| {
            ranking.crowding[b]
                .partial_cmp(&ranking.crowding[a])
                .unwrap_or(Ordering::Equal)
        });
        let remaining = capacity - keep.len();
        keep.extend_from_slice(&by_crowding[..remaining]);
        break;
    }

    let mut slots: Vec<Option<Individual>> = merged.into_iter().map(Some).collect();
    keep.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Rank-0 members of `population`; empty for an empty population.
fn first_front(population: Vec<Individual>) -> Vec<TestSuiteChromosome> {
    let objectives: Vec<Objectives> = population.iter().map(|i| i.objectives).collect();
    let sorted = non_dominated_sort(&objectives);
    population
        .into_iter()
        .zip(sorted.ranks)
        .filter(|(_, rank)| *rank == 0)
        .map(|(individual, _)| individual.suite)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
