//! Exact online non-dominated archive.

use super::dominance::dominates;
use crate::fitness::Objectives;

/// Outcome of [`ParetoArchive::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveInsert {
    /// The candidate was added; `evicted` members it dominated were removed.
    Inserted { evicted: usize },
    /// An existing member dominates the candidate; the archive is unchanged.
    Dominated,
    /// An equal item is already a member; the archive is unchanged.
    Duplicate,
}

/// A set of mutually non-dominated entries, maintained exactly under
/// insertion.
///
/// After every call to [`insert`](Self::insert) no member dominates another.
/// Entries with identical objectives do not dominate each other and are all
/// kept by `insert`; [`insert_unique`](Self::insert_unique) additionally
/// refuses items equal to a member.
///
/// # Example
///
/// ```
/// use suite_minimizer::fitness::Objectives;
/// use suite_minimizer::pareto::{ArchiveInsert, ParetoArchive};
///
/// let mut archive = ParetoArchive::new();
/// archive.insert("full", Objectives::new(1.0, 1.0));
/// archive.insert("half", Objectives::new(0.5, 0.6));
/// assert_eq!(archive.len(), 2);
///
/// // Full coverage with fewer tests evicts both earlier members.
/// let outcome = archive.insert("greedy", Objectives::new(0.3, 1.0));
/// assert_eq!(outcome, ArchiveInsert::Inserted { evicted: 2 });
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ParetoArchive<T> {
    members: Vec<(T, Objectives)>,
}

impl<T> Default for ParetoArchive<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T> ParetoArchive<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate to the archive.
    ///
    /// The candidate is discarded if any member dominates it. Otherwise it
    /// is added and every member it dominates is removed.
    pub fn insert(&mut self, item: T, objectives: Objectives) -> ArchiveInsert {
        if self.members.iter().any(|(_, o)| dominates(o, &objectives)) {
            return ArchiveInsert::Dominated;
        }

        let before = self.members.len();
        self.members.retain(|(_, o)| !dominates(&objectives, o));
        let evicted = before - self.members.len();

        self.members.push((item, objectives));
        ArchiveInsert::Inserted { evicted }
    }

    /// Like [`insert`](Self::insert), but discards a candidate equal to an
    /// existing member. Distinct items with identical objectives are kept.
    pub fn insert_unique(&mut self, item: T, objectives: Objectives) -> ArchiveInsert
    where
        T: PartialEq,
    {
        if self.contains(&item) {
            return ArchiveInsert::Duplicate;
        }
        self.insert(item, objectives)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.members.iter().any(|(member, _)| member == item)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members with their objectives, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &Objectives)> {
        self.members.iter().map(|(item, o)| (item, o))
    }

    /// Consumes the archive, returning the members in insertion order.
    pub fn into_items(self) -> Vec<T> {
        self.members.into_iter().map(|(item, _)| item).collect()
    }
}
