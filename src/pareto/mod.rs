//! Pareto machinery shared by the search algorithms.
//!
//! Domain-specific to the two objectives of suite minimization: size is
//! minimized, coverage is maximized.
//!
//! # Algorithms
//!
//! - [`dominates`]: Pareto dominance predicate
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//! - [`ParetoArchive`]: Exact online non-dominated archive
//! - [`hyper_volume`]: Two-dimensional hyper-volume indicator
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197
//! - Zitzler & Thiele (1999), "Multiobjective Evolutionary Algorithms: A Comparative
//!   Case Study and the Strength Pareto Approach"

mod archive;
mod dominance;
mod hypervolume;
mod sorting;

pub use archive::{ArchiveInsert, ParetoArchive};
pub use dominance::{dominance_cmp, dominates, Dominance};
pub use hypervolume::{hyper_volume, hyper_volume_of_points};
pub use sorting::{crowding_distance, non_dominated_sort, NondominatedSortResult};
