use crate::graph::VertexId;
use crate::queue::Distance;

/// Distance of a vertex the source cannot reach.
pub const INFINITY: Distance = Distance::INFINITY;

/// Counters collected while a run drains its queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Vertices extracted and finalized.
    pub settled: usize,
    /// Outgoing edges looked at from finalized vertices.
    pub edges_scanned: usize,
    /// Edges that lowered a neighbor's tentative distance.
    pub relaxations: usize,
    /// Superseded queue entries skipped on extraction.
    pub stale_entries: usize,
}

/// Result of a single-source run: tentative distance and predecessor for every vertex of the graph,
/// indexed by `VertexId`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Distance>,
    previous: Vec<Option<VertexId>>,
    pub(crate) stats: RunStats,
}

impl ShortestPaths {
    /// Every vertex unreached: infinite distance, no predecessor.
    pub(crate) fn new(source: VertexId, vertices: usize) -> Self {
        Self {
            source,
            distances: vec![INFINITY; vertices],
            previous: vec![None; vertices],
            stats: RunStats::default(),
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, `INFINITY` when unreachable or unknown.
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex.index())
            .copied()
            .unwrap_or(INFINITY)
    }

    pub(crate) fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances[vertex.index()] = distance;
    }

    /// Predecessor on the shortest path. `None` for the source and for unreachable vertices.
    pub fn previous(&self, vertex: VertexId) -> Option<VertexId> {
        self.previous.get(vertex.index()).copied().flatten()
    }

    pub(crate) fn set_previous(&mut self, vertex: VertexId, previous: Option<VertexId>) {
        self.previous[vertex.index()] = previous;
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Largest finite distance, `None` if nothing is reachable.
    pub fn max_distance(&self) -> Option<Distance> {
        self.distances
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .reduce(Distance::max)
    }

    /// `(vertex, distance, previous)` for every vertex, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance, Option<VertexId>)> + '_ {
        self.distances
            .iter()
            .zip(&self.previous)
            .enumerate()
            .map(|(i, (&d, &p))| (VertexId::new(i), d, p))
    }

    /// Vertices from the source to `target`, following predecessors backwards. The source's path
    /// is the source alone; unreachable targets have none.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.previous(current) {
            // A predecessor chain can't be longer than the vertex count.
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }
        if current != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
