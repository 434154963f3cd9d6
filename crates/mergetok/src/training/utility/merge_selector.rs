//! # Merge Selector

use core::cmp::Ordering;

use dary_heap::OctonaryHeap;

use crate::{training::utility::PairCounter, types::Pair};

/// Info about a [`Pair`] that could be merged.
#[derive(Debug, Clone, Eq)]
pub struct MergeJob {
    /// The number of instances of this pair in the corpus, when queued.
    pub count: usize,

    /// The pair to merge.
    pub pair: Pair,
}

impl MergeJob {
    /// Highest count first; among equal counts, the smallest ``(left, right)``.
    fn priority_cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialEq for MergeJob {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.count == other.count && self.pair == other.pair
    }
}

impl PartialOrd for MergeJob {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeJob {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.priority_cmp(other)
    }
}

/// Picks the next pair to merge.
///
/// The winner is the pair with strictly the highest current count; ties go to
/// the lexicographically smallest ``(left, right)``.
///
/// Queued jobs may carry stale counts; they are refreshed against the
/// [`PairCounter`] when they reach the top of the heap. Callers must
/// [`MergeSelector::push`] every pair whose count grows.
#[derive(Debug, Default)]
pub struct MergeSelector {
    heap: OctonaryHeap<MergeJob>,
}

impl MergeSelector {
    /// Queue every pair currently counted.
    pub fn from_counter(counter: &PairCounter) -> Self {
        let mut heap = OctonaryHeap::with_capacity(counter.pair_counts.len());
        for (pair, &count) in counter.pair_counts.iter() {
            if count > 0 {
                heap.push(MergeJob {
                    count,
                    pair: pair.clone(),
                });
            }
        }
        Self { heap }
    }

    /// The number of queued jobs (including stale ones).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Is the queue empty?
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queue `pair` at its current count.
    pub fn push(
        &mut self,
        pair: Pair,
        counter: &PairCounter,
    ) {
        let count = counter.count(&pair);
        if count > 0 {
            self.heap.push(MergeJob { count, pair });
        }
    }

    /// Remove and return the best pair, with its current count.
    ///
    /// Returns `None` when no pair has a positive count.
    pub fn pop_best(
        &mut self,
        counter: &PairCounter,
    ) -> Option<MergeJob> {
        while let Some(mut job) = self.heap.pop() {
            // Lazy refresh the job count.
            let current = counter.count(&job.pair);
            if job.count != current {
                job.count = current;
                if current > 0 {
                    self.heap.push(job);
                }
                continue;
            }
            return Some(job);
        }
        None
    }
}

/// Select the best pair from a full count table.
///
/// Same policy as [`MergeSelector`], without the heap.
pub fn select_best_pair<'a, I>(counts: I) -> Option<(&'a Pair, usize)>
where
    I: IntoIterator<Item = (&'a Pair, &'a usize)>,
{
    counts
        .into_iter()
        .filter(|(_, c)| **c > 0)
        .map(|(p, c)| (p, *c))
        .reduce(|best, cand| {
            if cand.1 > best.1 || (cand.1 == best.1 && cand.0 < best.0) {
                cand
            } else {
                best
            }
        })
}
