//! Per-query working state and the relaxation loop.

use sp_core::{Slot, UNREACHED, Weight};

use crate::compiled::CompiledGraph;
use crate::frontier::Frontier;
use crate::route::{QueryOutcome, QueryStats};

/// Tentative distances, visited flags and predecessors for one query.
///
/// Allocated fresh by every query and dropped when it returns.
#[derive(Debug, Clone)]
pub(crate) struct QueryState {
    pub(crate) dist: Vec<Weight>,
    pub(crate) visited: Vec<bool>,
    /// `pred[start] == Some(start)` marks the origin.
    pub(crate) pred: Vec<Option<Slot>>,
}

impl QueryState {
    pub(crate) fn new(node_count: usize, start: Slot) -> Self {
        let mut dist = vec![UNREACHED; node_count];
        let mut pred = vec![None; node_count];
        dist[start.index()] = 0.0;
        pred[start.index()] = Some(start);
        Self {
            dist,
            visited: vec![false; node_count],
            pred,
        }
    }

    /// Settle nodes until `target` is settled or no reachable node is left.
    pub(crate) fn run<T, F>(
        &mut self,
        graph: &CompiledGraph<'_, T>,
        start: Slot,
        target: Option<Slot>,
        frontier: &mut F,
        stats: &mut QueryStats,
    ) where
        T: Ord + Clone,
        F: Frontier,
    {
        frontier.push(start, 0.0);

        while let Some(min) = frontier.pop_min(&self.dist, &self.visited) {
            self.visited[min.index()] = true;
            stats.settled += 1;
            tracing::trace!(slot = %min, dist = self.dist[min.index()], "settled");

            if target == Some(min) {
                stats.outcome = QueryOutcome::TargetReached;
                return;
            }

            self.relax(graph, min, frontier, stats);
        }

        stats.outcome = QueryOutcome::FrontierExhausted;
    }

    /// Tighten the distance of every neighbor of `from`.
    fn relax<T, F>(
        &mut self,
        graph: &CompiledGraph<'_, T>,
        from: Slot,
        frontier: &mut F,
        stats: &mut QueryStats,
    ) where
        T: Ord + Clone,
        F: Frontier,
    {
        let base = self.dist[from.index()];
        for (to, weight) in graph.edges(from) {
            let Some(to) = to else {
                stats.skipped_edges += 1;
                tracing::trace!(from = %from, "skipping edge to neighbor outside the node set");
                continue;
            };

            let candidate = base + weight;
            let ti = to.index();
            if candidate < self.dist[ti] {
                self.dist[ti] = candidate;
                self.pred[ti] = Some(from);
                frontier.push(to, candidate);
                stats.relaxations += 1;
            }
        }
    }

    /// Walk predecessors back from `end` to `start`.
    ///
    /// Returns slots in start-to-end order, or `None` if `end` was never
    /// reached.
    pub(crate) fn reconstruct(&self, start: Slot, end: Slot) -> Option<Vec<Slot>> {
        if !self.dist[end.index()].is_finite() {
            return None;
        }

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            current = self.pred[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::LinearFrontier;
    use sp_graph::Graph;

    fn slot(i: usize) -> Slot {
        Slot::from_index(i)
    }

    #[test]
    fn new_state_marks_origin() {
        let state = QueryState::new(3, slot(1));
        assert_eq!(state.dist, vec![UNREACHED, 0.0, UNREACHED]);
        assert_eq!(state.pred[1], Some(slot(1)));
        assert!(state.visited.iter().all(|v| !v));
    }

    #[test]
    fn relaxation_keeps_cheapest_predecessor() {
        // 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (1)
        let graph = Graph::new(
            [0_u8, 1, 2],
            [(0, vec![(1, 4.0), (2, 1.0)]), (2, vec![(1, 1.0)])],
        )
        .unwrap();
        let compiled = CompiledGraph::new(&graph);

        let mut state = QueryState::new(3, slot(0));
        let mut stats = QueryStats::default();
        state.run(&compiled, slot(0), None, &mut LinearFrontier, &mut stats);

        assert_eq!(state.dist, vec![0.0, 2.0, 1.0]);
        assert_eq!(state.pred[1], Some(slot(2)));
        assert_eq!(stats.outcome, QueryOutcome::FrontierExhausted);
        assert_eq!(stats.settled, 3);
        // 0->1, 0->2, then 2->1 improves 4 to 2
        assert_eq!(stats.relaxations, 3);
        assert_eq!(
            state.reconstruct(slot(0), slot(1)),
            Some(vec![slot(0), slot(2), slot(1)])
        );
    }

    #[test]
    fn stops_at_target() {
        // 0 -> 1 (1) -> 2 (1)
        let graph = Graph::new([0_u8, 1, 2], [(0, vec![(1, 1.0)]), (1, vec![(2, 1.0)])]).unwrap();
        let compiled = CompiledGraph::new(&graph);

        let mut state = QueryState::new(3, slot(0));
        let mut stats = QueryStats::default();
        state.run(&compiled, slot(0), Some(slot(1)), &mut LinearFrontier, &mut stats);

        assert_eq!(stats.outcome, QueryOutcome::TargetReached);
        assert_eq!(stats.settled, 2);
        assert!(!state.visited[2]);
        assert_eq!(state.dist[2], UNREACHED);
    }

    #[test]
    fn unreached_end_has_no_path() {
        let graph = Graph::new([0_u8, 1], Vec::<(u8, Vec<(u8, f64)>)>::new()).unwrap();
        let compiled = CompiledGraph::new(&graph);

        let mut state = QueryState::new(2, slot(0));
        let mut stats = QueryStats::default();
        state.run(&compiled, slot(0), Some(slot(1)), &mut LinearFrontier, &mut stats);

        assert_eq!(stats.outcome, QueryOutcome::FrontierExhausted);
        assert!(state.reconstruct(slot(0), slot(1)).is_none());
    }

    #[test]
    fn dangling_neighbors_are_counted_and_skipped() {
        let graph = Graph::new([0_u8, 1], [(0, vec![(1, 1.0), (7, 0.5)])]).unwrap();
        let compiled = CompiledGraph::new(&graph);

        let mut state = QueryState::new(2, slot(0));
        let mut stats = QueryStats::default();
        state.run(&compiled, slot(0), None, &mut LinearFrontier, &mut stats);

        assert_eq!(stats.skipped_edges, 1);
        assert_eq!(state.dist, vec![0.0, 1.0]);
    }
}
