//! Per-request dynamic-programming table
//!
//! Index `v` of a [`SearchState`] holds the fewest operations found that move
//! the work value from 0 to `v`, and one witness sequence achieving it. The
//! table is built fresh for every request and never shared.
//!
//! Witnesses are stored as an append-only list of links, each pointing at the
//! link it extends. An update records one link and leaves older chains
//! untouched, so memory stays linear in the number of updates.

use crate::search::result::Outcome;
use crate::vocab::Vocabulary;

/// One step of a witness chain: the delta applied and the link before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    parent: Option<usize>,
    delta: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    min_count: Vec<Option<u32>>,
    /// Last link of each value's witness; `None` for the empty witness.
    tail: Vec<Option<usize>>,
    links: Vec<Link>,
}

impl SearchState {
    /// Fresh table over `[0, bound)` with only 0 reached.
    ///
    /// A zero bound still holds value 0, so only 0 is reachable.
    pub fn seeded(bound: usize) -> Self {
        let len = bound.max(1);
        let mut min_count = vec![None; len];
        min_count[0] = Some(0);
        Self {
            min_count,
            tail: vec![None; len],
            links: Vec::new(),
        }
    }

    /// Number of values covered, `[0, bound)`
    pub fn bound(&self) -> usize {
        self.min_count.len()
    }

    pub fn min_count(&self, value: u64) -> Option<u32> {
        let index = usize::try_from(value).ok()?;
        self.count_at(index)
    }

    /// Witness in application order, for reached values only.
    pub fn witness(&self, value: u64) -> Option<Vec<i64>> {
        let index = usize::try_from(value).ok()?;
        let count = self.count_at(index)?;

        let mut witness = Vec::with_capacity(count as usize);
        let mut cursor = self.tail[index];
        while let Some(link) = cursor.map(|at| self.links[at]) {
            witness.push(link.delta);
            cursor = link.parent;
        }
        witness.reverse();
        Some(witness)
    }

    /// How many values in the bound have a finite count
    pub fn reached(&self) -> usize {
        self.min_count.iter().filter(|count| count.is_some()).count()
    }

    /// Witness links recorded so far, one per successful update
    pub fn links(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn count_at(&self, index: usize) -> Option<u32> {
        self.min_count.get(index).copied().flatten()
    }

    /// Index reached by applying `delta` at `from`, if it stays inside the bound.
    pub(crate) fn step(&self, from: usize, delta: i64) -> Option<usize> {
        let next = i64::try_from(from).ok()?.checked_add(delta)?;
        let next = usize::try_from(next).ok()?;
        (next < self.bound()).then_some(next)
    }

    /// Record `from + delta` as reachable in one more step than `from`.
    ///
    /// Only a strict improvement replaces an existing entry, so the first
    /// witness found at a given count is kept. The new link extends `from`'s
    /// witness as it stands now; later updates to `from` do not change it.
    pub(crate) fn relax(&mut self, from: usize, next: usize, delta: i64) -> bool {
        let Some(count) = self.count_at(from) else {
            return false;
        };
        let candidate = count.saturating_add(1);
        if self.count_at(next).is_some_and(|existing| existing <= candidate) {
            return false;
        }

        self.links.push(Link {
            parent: self.tail[from],
            delta,
        });
        self.min_count[next] = Some(candidate);
        self.tail[next] = Some(self.links.len() - 1);
        true
    }

    /// Result for `target`, labelled with the vocabulary the table was built from.
    ///
    /// The table is indexed by `|target|`; the oriented vocabulary already
    /// accounts for the sign.
    pub fn outcome(&self, target: i64, vocabulary: &Vocabulary) -> Outcome {
        match self.witness(target.unsigned_abs()) {
            Some(mut operations) => {
                // Sorted for display only; application order is not preserved.
                operations.sort_unstable();
                Outcome::found(target, operations, vocabulary)
            }
            None => Outcome::NoSolution { target },
        }
    }
}
