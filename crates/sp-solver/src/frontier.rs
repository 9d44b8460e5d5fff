//! Minimum-distance frontier selection.
//!
//! Both frontiers return the unvisited node with the smallest finite
//! distance, breaking ties towards the lowest slot (node-set order), so they
//! are interchangeable without changing query results.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sp_core::{Slot, Weight};

pub(crate) trait Frontier {
    /// Record that `slot` now has tentative distance `dist`.
    fn push(&mut self, slot: Slot, dist: Weight);

    /// Remove and return the next node to settle, or `None` when no
    /// unvisited node has a finite distance.
    fn pop_min(&mut self, dist: &[Weight], visited: &[bool]) -> Option<Slot>;
}

/// O(V) scan of the distance table per step.
#[derive(Debug, Default)]
pub(crate) struct LinearFrontier;

impl Frontier for LinearFrontier {
    fn push(&mut self, _slot: Slot, _dist: Weight) {}

    fn pop_min(&mut self, dist: &[Weight], visited: &[bool]) -> Option<Slot> {
        let mut best: Option<(usize, Weight)> = None;
        for (i, (&d, &seen)) in dist.iter().zip(visited).enumerate() {
            if seen || !d.is_finite() {
                continue;
            }
            // strict `<` keeps the first minimum
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| Slot::from_index(i))
    }
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first, then the lowest slot.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    slot: Slot,
    dist: Weight,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Binary heap with lazy deletion of stale entries.
#[derive(Debug, Default)]
pub(crate) struct HeapFrontier {
    open: BinaryHeap<HeapEntry>,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, slot: Slot, dist: Weight) {
        self.open.push(HeapEntry { slot, dist });
    }

    fn pop_min(&mut self, dist: &[Weight], visited: &[bool]) -> Option<Slot> {
        while let Some(entry) = self.open.pop() {
            let i = entry.slot.index();
            // Skip stale entries.
            if visited[i] || entry.dist > dist[i] {
                continue;
            }
            return Some(entry.slot);
        }
        None
    }
}
