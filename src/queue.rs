/*
Mutable-key min-queue of vertices, ordered by tentative distance.

The driver lowers a queued vertex's key whenever it finds a shorter path. Backends either restore
heap order on the spot (decrease-key) or keep the superseded entry around and hand it back later;
the driver tells the two apart by the vertex state it keeps for itself.

Ties on distance are broken by the lower vertex id in every backend.
*/

use ordered_float::OrderedFloat;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownQueueKind;
use crate::graph::VertexId;

pub type Distance = f64;

/// Total order used by every backend: distance first, then vertex id.
pub(crate) type Priority = (OrderedFloat<Distance>, VertexId);

#[inline(always)]
pub(crate) fn priority(vertex: VertexId, key: Distance) -> Priority {
    debug_assert!(!key.is_nan());
    (OrderedFloat(key), vertex)
}

pub trait MutableKeyQueue {
    /// Empty queue sized for a graph of `vertices` vertices.
    fn with_capacity(vertices: usize) -> Self
    where
        Self: Sized;

    /// Number of entries held, stale ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queues `vertex` with `key`, or lowers its key if it is already queued.
    ///
    /// Decrease-key backends ignore a `key` that is not below the queued one. Lazy backends queue it
    /// anyway, so the driver only calls this after a successful relaxation.
    fn push_or_decrease(&mut self, vertex: VertexId, key: Distance);

    /// Removes the entry with the smallest key. Backends without decrease-key may return entries
    /// whose key has since been superseded.
    fn pop(&mut self) -> Option<(VertexId, Distance)>;
}

/// Runtime choice of queue backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueKind {
    /// Indexed binary heap with decrease-key.
    #[default]
    Indexed,
    /// `BinaryHeap` that keeps stale entries.
    Lazy,
    /// `orx_priority_queue::BinaryHeapWithMap`.
    Orx,
    /// `priority_queue::PriorityQueue`.
    Keyed,
}

impl QueueKind {
    pub const ALL: [QueueKind; 4] = [
        QueueKind::Indexed,
        QueueKind::Lazy,
        QueueKind::Orx,
        QueueKind::Keyed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueueKind::Indexed => "indexed",
            QueueKind::Lazy => "lazy",
            QueueKind::Orx => "orx",
            QueueKind::Keyed => "keyed",
        }
    }
}

impl FromStr for QueueKind {
    type Err = UnknownQueueKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownQueueKind(s.to_string()))
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Checks shared by every backend's tests.
#[cfg(test)]
pub(crate) mod conformance {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    pub fn pops_in_key_order<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(3);
        assert!(queue.is_empty());
        queue.push_or_decrease(v(0), 5.0);
        queue.push_or_decrease(v(1), 3.0);
        queue.push_or_decrease(v(2), 4.0);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((v(1), 3.0)));
        assert_eq!(queue.pop(), Some((v(2), 4.0)));
        assert_eq!(queue.pop(), Some((v(0), 5.0)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    /// After a key is lowered, extraction follows the current key, not the one it was queued with.
    pub fn follows_decreased_keys<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(4);
        queue.push_or_decrease(v(0), 5.0);
        queue.push_or_decrease(v(1), 3.0);
        queue.push_or_decrease(v(2), 4.0);
        queue.push_or_decrease(v(0), 1.0);
        assert_eq!(queue.pop(), Some((v(0), 1.0)));
        queue.push_or_decrease(v(2), 2.0);
        queue.push_or_decrease(v(3), 2.5);
        assert_eq!(queue.pop(), Some((v(2), 2.0)));
        assert_eq!(queue.pop(), Some((v(3), 2.5)));
        assert_eq!(queue.pop(), Some((v(1), 3.0)));
    }

    /// Decrease-key backends hold a single entry per vertex.
    pub fn holds_one_entry_per_vertex<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(2);
        queue.push_or_decrease(v(0), 9.0);
        queue.push_or_decrease(v(0), 7.0);
        queue.push_or_decrease(v(1), 8.0);
        queue.push_or_decrease(v(0), 6.0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((v(0), 6.0)));
        assert_eq!(queue.pop(), Some((v(1), 8.0)));
        assert_eq!(queue.pop(), None);
    }

    pub fn breaks_ties_by_id<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(3);
        queue.push_or_decrease(v(2), 1.0);
        queue.push_or_decrease(v(0), 1.0);
        queue.push_or_decrease(v(1), 1.0);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).map(|(id, _)| id).collect();
        assert_eq!(order, vec![v(0), v(1), v(2)]);
    }

    /// A key above the queued one leaves the entry untouched.
    pub fn ignores_raised_keys<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(2);
        queue.push_or_decrease(v(0), 1.0);
        queue.push_or_decrease(v(1), 3.0);
        queue.push_or_decrease(v(0), 5.0);
        queue.push_or_decrease(v(0), 1.0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((v(0), 1.0)));
        assert_eq!(queue.pop(), Some((v(1), 3.0)));
        assert_eq!(queue.pop(), None);
    }

    /// Ids beyond the initial capacity are still accepted.
    pub fn grows_past_capacity<Q: MutableKeyQueue>() {
        let mut queue = Q::with_capacity(0);
        queue.push_or_decrease(v(10), 2.0);
        queue.push_or_decrease(v(3), 1.0);
        assert_eq!(queue.pop(), Some((v(3), 1.0)));
        assert_eq!(queue.pop(), Some((v(10), 2.0)));
    }
}
