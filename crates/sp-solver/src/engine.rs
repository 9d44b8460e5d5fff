//! The shortest-path engine.

use std::collections::BTreeMap;

use sp_core::timing::{Timer, query_timing};
use sp_core::{Slot, Weight};
use sp_graph::Graph;

use crate::compiled::CompiledGraph;
use crate::error::{Endpoint, PathError, PathResult};
use crate::frontier::{Frontier, HeapFrontier, LinearFrontier};
use crate::options::{EngineOptions, FrontierKind};
use crate::query::QueryState;
use crate::route::{QueryOutcome, QueryStats, Route};

/// Single-source, single-target Dijkstra over a borrowed graph.
///
/// The engine holds the graph by shared reference, so the graph cannot be
/// mutated while the engine exists. Every query allocates its own working
/// state; concurrent queries on one engine are fine when `T: Sync`.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<'g, T> {
    graph: &'g Graph<T>,
    compiled: CompiledGraph<'g, T>,
    options: EngineOptions,
}

impl<'g, T: Ord + Clone> ShortestPathEngine<'g, T> {
    /// Create an engine with default options (linear frontier).
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self::with_options(graph, EngineOptions::default())
    }

    pub fn with_options(graph: &'g Graph<T>, options: EngineOptions) -> Self {
        Self {
            graph,
            compiled: CompiledGraph::new(graph),
            options,
        }
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Find the minimum-weight path from `start` to `end`.
    ///
    /// `start == end` always succeeds with the one-node route, even for a
    /// node outside the graph.
    pub fn find(&self, start: &T, end: &T) -> PathResult<Route<T>> {
        self.find_with_stats(start, end).0
    }

    /// Like [`find`](Self::find), collapsing every failure to `None`.
    pub fn find_path(&self, start: &T, end: &T) -> Option<Vec<T>> {
        self.find(start, end).ok().map(Route::into_nodes)
    }

    /// Run a query and also report what the loop did.
    pub fn find_with_stats(&self, start: &T, end: &T) -> (PathResult<Route<T>>, QueryStats) {
        let mut stats = QueryStats::default();

        if start == end {
            stats.outcome = QueryOutcome::Trivial;
            return (Ok(Route::trivial(start.clone())), stats);
        }

        let (s, e) = match self.endpoints(start, end) {
            Ok(slots) => slots,
            Err(err) => {
                stats.outcome = QueryOutcome::InvalidEndpoint;
                tracing::debug!(%err, "query rejected");
                return (Err(err), stats);
            }
        };

        let timer = Timer::start();
        let state = self.run(s, Some(e), &mut stats);
        let result = match state.reconstruct(s, e) {
            Some(slots) => Ok(Route {
                nodes: self.resolve(&slots),
                weight: state.dist[e.index()],
            }),
            None => Err(PathError::NoRoute),
        };
        timer.stop_into(&query_timing::FIND_CALLS);

        tracing::debug!(
            start = %s,
            end = %e,
            outcome = ?stats.outcome,
            settled = stats.settled,
            relaxations = stats.relaxations,
            found = result.is_ok(),
            "query finished"
        );
        (result, stats)
    }

    /// Distances from `start` to every node it can reach, `start` included.
    pub fn distances_from(&self, start: &T) -> PathResult<BTreeMap<T, Weight>> {
        let s = self.compiled.index.slot(start).ok_or(PathError::UnknownEndpoint {
            endpoint: Endpoint::Start,
        })?;

        let timer = Timer::start();
        let mut stats = QueryStats::default();
        let state = self.run(s, None, &mut stats);
        let distances = self
            .compiled
            .index
            .node_ids()
            .iter()
            .zip(&state.dist)
            .filter(|(_, d)| d.is_finite())
            .map(|(&node, &d)| (node.clone(), d))
            .collect();
        timer.stop_into(&query_timing::DISTANCE_CALLS);

        tracing::debug!(start = %s, settled = stats.settled, "distance sweep finished");
        Ok(distances)
    }

    fn endpoints(&self, start: &T, end: &T) -> PathResult<(Slot, Slot)> {
        let index = &self.compiled.index;
        let s = index.slot(start).ok_or(PathError::UnknownEndpoint {
            endpoint: Endpoint::Start,
        })?;
        let e = index.slot(end).ok_or(PathError::UnknownEndpoint {
            endpoint: Endpoint::End,
        })?;
        Ok((s, e))
    }

    fn run(&self, start: Slot, target: Option<Slot>, stats: &mut QueryStats) -> QueryState {
        match self.options.frontier {
            FrontierKind::Linear => self.run_with(start, target, LinearFrontier, stats),
            FrontierKind::Heap => self.run_with(start, target, HeapFrontier::default(), stats),
        }
    }

    fn run_with<F: Frontier>(
        &self,
        start: Slot,
        target: Option<Slot>,
        mut frontier: F,
        stats: &mut QueryStats,
    ) -> QueryState {
        let mut state = QueryState::new(self.compiled.node_count(), start);
        state.run(&self.compiled, start, target, &mut frontier, stats);
        state
    }

    fn resolve(&self, slots: &[Slot]) -> Vec<T> {
        slots
            .iter()
            .map(|&slot| self.compiled.index.node(slot).clone())
            .collect()
    }
}
