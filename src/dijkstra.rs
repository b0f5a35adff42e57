use tracing::{debug, debug_span, trace};

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::indexed_queue::IndexedQueue;
use crate::keyed_queue::KeyedQueue;
use crate::lazy_queue::LazyQueue;
use crate::pq_queue::OrxQueue;
use crate::queue::{MutableKeyQueue, QueueKind};
use crate::shortest_paths::ShortestPaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexState {
    Unvisited,
    Queued,
    Finalized,
}

/// Dijkstra from `source` to all vertices of `graph`, using the indexed decrease-key queue.
/// Unreachable vertices keep an infinite distance and no predecessor.
pub fn run(graph: &Graph, source: VertexId) -> Result<ShortestPaths, GraphError> {
    run_with::<IndexedQueue>(graph, source)
}

/// Dijkstra from `source` over any mutable-key queue.
///
/// Fails with `DistanceOverflow` if a path length no longer fits in a finite `f64`, since an
/// infinite distance would read as unreachable.
///
/// Edge weights are known to be finite and non-negative, `Graph::add_edge` refuses anything else,
/// so a vertex is final as soon as it leaves the queue. Entries popped for a vertex that is already
/// final are superseded copies and get skipped.
pub fn run_with<Q: MutableKeyQueue>(
    graph: &Graph,
    source: VertexId,
) -> Result<ShortestPaths, GraphError> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownVertex(source));
    }

    let n = graph.len();
    let span = debug_span!("dijkstra", source = %source, vertices = n);
    let _guard = span.enter();

    let mut paths = ShortestPaths::new(source, n);
    let mut state = vec![VertexState::Unvisited; n];
    let mut queue = Q::with_capacity(n);

    paths.set_distance(source, 0.0);
    queue.push_or_decrease(source, 0.0);
    state[source.index()] = VertexState::Queued;

    while let Some((current, cost)) = queue.pop() {
        if state[current.index()] == VertexState::Finalized || cost > paths.distance(current) {
            paths.stats.stale_entries += 1;
            continue;
        }
        state[current.index()] = VertexState::Finalized;
        paths.stats.settled += 1;
        trace!(vertex = %current, distance = cost, "settled");

        for (next, weight) in graph.edges(current) {
            paths.stats.edges_scanned += 1;
            if state[next.index()] == VertexState::Finalized {
                continue;
            }
            let next_cost = cost + weight;
            if !next_cost.is_finite() {
                return Err(GraphError::DistanceOverflow {
                    from: current,
                    to: next,
                });
            }
            if next_cost < paths.distance(next) {
                paths.set_distance(next, next_cost);
                paths.set_previous(next, Some(current));
                queue.push_or_decrease(next, next_cost);
                state[next.index()] = VertexState::Queued;
                paths.stats.relaxations += 1;
            }
        }
    }

    let stats = paths.stats();
    debug!(
        settled = stats.settled,
        edges_scanned = stats.edges_scanned,
        relaxations = stats.relaxations,
        stale_entries = stats.stale_entries,
        "run finished"
    );
    Ok(paths)
}

impl QueueKind {
    pub fn run(self, graph: &Graph, source: VertexId) -> Result<ShortestPaths, GraphError> {
        match self {
            QueueKind::Indexed => run_with::<IndexedQueue>(graph, source),
            QueueKind::Lazy => run_with::<LazyQueue>(graph, source),
            QueueKind::Orx => run_with::<OrxQueue>(graph, source),
            QueueKind::Keyed => run_with::<KeyedQueue>(graph, source),
        }
    }
}
