//! Genetic operators for test-suite chromosomes.
//!
//! Operators are strategies behind two small traits, [`Mutation`] and
//! [`Crossover`], so an algorithm can swap them without code changes.
//! Every operator returns fresh chromosomes and never modifies its inputs;
//! every offspring is repaired to select at least one test.
//!
//! # Crossover Operators
//!
//! - [`SinglePointCrossover`]: one uniform cut point, tails exchanged, O(n)
//! - [`IdentityCrossover`]: children are copies of the parents
//!
//! # Mutation Operators
//!
//! - [`BitFlipMutation`]: every gene flipped with probability 1/n, O(n)
//! - [`IdentityMutation`]: child is a copy of the parent
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Yoo & Harman (2007), "Pareto Efficient Multi-Objective Test Case Selection"

use super::chromosome::TestSuiteChromosome;
use rand::Rng;

/// Produces one offspring by perturbing a parent.
pub trait Mutation {
    /// Returns a mutated copy of `parent`.
    fn mutate<R: Rng>(&self, parent: &TestSuiteChromosome, rng: &mut R) -> TestSuiteChromosome;
}

/// Produces two offspring by recombining two parents.
pub trait Crossover {
    /// Returns two children built from `parent1` and `parent2`.
    ///
    /// # Panics
    /// Implementations may panic if the parents have different lengths.
    fn crossover<R: Rng>(
        &self,
        parent1: &TestSuiteChromosome,
        parent2: &TestSuiteChromosome,
        rng: &mut R,
    ) -> (TestSuiteChromosome, TestSuiteChromosome);
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// # Algorithm
///
/// 1. Draw a cut point uniformly in `[0, n)`
/// 2. child1 = parent1[..cut] + parent2[cut..]
/// 3. child2 = parent2[..cut] + parent1[cut..]
/// 4. Repair each child independently
///
/// # Complexity
/// O(n) time, O(n) space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointCrossover;

impl Crossover for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &TestSuiteChromosome,
        parent2: &TestSuiteChromosome,
        rng: &mut R,
    ) -> (TestSuiteChromosome, TestSuiteChromosome) {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");

        let cut = rng.random_range(0..n);
        let (g1, g2) = (parent1.genes(), parent2.genes());

        let child1: Vec<bool> = g1[..cut].iter().chain(&g2[cut..]).copied().collect();
        let child2: Vec<bool> = g2[..cut].iter().chain(&g1[cut..]).copied().collect();

        (
            TestSuiteChromosome::repaired(child1, rng),
            TestSuiteChromosome::repaired(child2, rng),
        )
    }
}

/// Crossover that returns copies of both parents unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCrossover;

impl Crossover for IdentityCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &TestSuiteChromosome,
        parent2: &TestSuiteChromosome,
        _rng: &mut R,
    ) -> (TestSuiteChromosome, TestSuiteChromosome) {
        (parent1.clone(), parent2.clone())
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation with per-gene probability `1 / n`.
///
/// On average one test is added or removed per application. A child whose
/// selection becomes empty is repaired by switching on one random test.
///
/// # Complexity
/// O(n)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFlipMutation;

impl Mutation for BitFlipMutation {
    fn mutate<R: Rng>(&self, parent: &TestSuiteChromosome, rng: &mut R) -> TestSuiteChromosome {
        let mut genes = parent.to_genes();
        let p = 1.0 / genes.len() as f64;

        for gene in genes.iter_mut() {
            if rng.random::<f64>() < p {
                *gene = !*gene;
            }
        }

        TestSuiteChromosome::repaired(genes, rng)
    }
}

/// Mutation that returns an unchanged copy of the parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityMutation;

impl Mutation for IdentityMutation {
    fn mutate<R: Rng>(&self, parent: &TestSuiteChromosome, _rng: &mut R) -> TestSuiteChromosome {
        parent.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn suite(bits: &[bool]) -> TestSuiteChromosome {
        let mut rng = create_rng(0);
        TestSuiteChromosome::new(bits.to_vec(), &mut rng).unwrap()
    }

    // ---- Single-point crossover ----

    #[test]
    fn test_crossover_children_are_complementary() {
        let mut rng = create_rng(42);
        let p1 = suite(&[true; 8]);
        let p2 = suite(&[true, false, true, false, true, false, true, false]);

        for _ in 0..100 {
            let (c1, c2) = SinglePointCrossover.crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 8);
            assert_eq!(c2.len(), 8);
            // p1 is all-true, so no repair can kick in and genes at every
            // position come from exactly one parent each.
            for i in 0..8 {
                assert_eq!(
                    c1.is_selected(i) as u8 + c2.is_selected(i) as u8,
                    1 + p2.is_selected(i) as u8
                );
            }
        }
    }

    #[test]
    fn test_crossover_prefix_and_suffix() {
        let mut rng = create_rng(3);
        let p1 = suite(&[true, true, true, true, true]);
        let p2 = suite(&[false, false, false, false, true]);

        for _ in 0..50 {
            let (c1, _) = SinglePointCrossover.crossover(&p1, &p2, &mut rng);
            // c1 is a run of trues (prefix of p1) followed by p2's tail.
            let genes = c1.genes();
            let cut = genes.iter().position(|&g| !g).unwrap_or(4);
            assert!(genes[..cut].iter().all(|&g| g));
            assert!(genes[cut..4].iter().all(|&g| !g));
            assert!(genes[4]);
        }
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = create_rng(42);
        let p = suite(&[true, false, true, true]);
        let (c1, c2) = SinglePointCrossover.crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_crossover_single_gene() {
        let mut rng = create_rng(42);
        let p = suite(&[true]);
        let (c1, c2) = SinglePointCrossover.crossover(&p, &p, &mut rng);
        assert_eq!(c1.genes(), &[true]);
        assert_eq!(c2.genes(), &[true]);
    }

    #[test]
    fn test_crossover_repairs_empty_children() {
        let mut rng = create_rng(5);
        let p1 = TestSuiteChromosome::singleton(6, 0);
        let p2 = TestSuiteChromosome::singleton(6, 5);
        for _ in 0..100 {
            let (c1, c2) = SinglePointCrossover.crossover(&p1, &p2, &mut rng);
            assert!(c1.num_selected_tests() >= 1);
            assert!(c2.num_selected_tests() >= 1);
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        let p1 = suite(&[true, false]);
        let p2 = suite(&[true, false, true]);
        SinglePointCrossover.crossover(&p1, &p2, &mut rng);
    }

    // ---- Bit-flip mutation ----

    #[test]
    fn test_mutation_leaves_parent_unchanged() {
        let mut rng = create_rng(42);
        let parent = suite(&[true, false, true, false, true]);
        let snapshot = parent.to_genes();
        for _ in 0..100 {
            let child = BitFlipMutation.mutate(&parent, &mut rng);
            assert_eq!(child.len(), parent.len());
            assert!(child.num_selected_tests() >= 1);
        }
        assert_eq!(parent.genes(), snapshot.as_slice());
    }

    #[test]
    fn test_mutation_flips_about_one_gene() {
        let mut rng = create_rng(9);
        let parent = suite(&[true; 50]);
        let trials = 2000;
        let mut flips = 0usize;
        for _ in 0..trials {
            let child = BitFlipMutation.mutate(&parent, &mut rng);
            flips += 50 - child.num_selected_tests();
        }
        let mean = flips as f64 / trials as f64;
        assert!((0.8..1.2).contains(&mean), "expected ~1 flip on average, got {mean}");
    }

    #[test]
    fn test_mutation_eventually_changes_suite() {
        let mut rng = create_rng(1);
        let parent = suite(&[true, false, true, false]);
        let changed = (0..100).any(|_| BitFlipMutation.mutate(&parent, &mut rng) != parent);
        assert!(changed, "bit-flip should change the suite eventually");
    }

    // ---- Identity operators ----

    #[test]
    fn test_identity_operators() {
        let mut rng = create_rng(42);
        let p1 = suite(&[true, false]);
        let p2 = suite(&[false, true]);
        assert_eq!(IdentityMutation.mutate(&p1, &mut rng), p1);
        let (c1, c2) = IdentityCrossover.crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    // ---- Integration: crossover + mutation pipeline ----

    proptest! {
        #[test]
        fn prop_pipeline_preserves_length_and_validity(
            a in prop::collection::vec(any::<bool>(), 1..40),
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let n = a.len();
            let b: Vec<bool> = a.iter().map(|g| !g).collect();
            let p1 = TestSuiteChromosome::new(a, &mut rng).unwrap();
            let p2 = TestSuiteChromosome::new(b, &mut rng).unwrap();
            let p1_before = p1.clone();
            let p2_before = p2.clone();

            let (c1, c2) = SinglePointCrossover.crossover(&p1, &p2, &mut rng);
            let m1 = BitFlipMutation.mutate(&c1, &mut rng);
            let m2 = BitFlipMutation.mutate(&c2, &mut rng);

            for c in [&c1, &c2, &m1, &m2] {
                prop_assert_eq!(c.len(), n);
                prop_assert!(c.num_selected_tests() >= 1);
            }
            prop_assert_eq!(p1, p1_before);
            prop_assert_eq!(p2, p2_before);
        }
    }
}
