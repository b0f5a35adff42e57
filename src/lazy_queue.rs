// Binary heap without decrease-key: a lowered key is pushed as a new entry and the old one stays
// behind. Stale entries come out after the fresh one, and it's up to the caller to skip them.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::VertexId;
use crate::queue::{priority, Distance, MutableKeyQueue};

#[derive(Copy, Clone, Debug, PartialEq)]
struct State {
    cost: Distance,
    vertex: VertexId,
}

// Min-heap by cost, then by vertex id.
impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        priority(other.vertex, other.cost).cmp(&priority(self.vertex, self.cost))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct LazyQueue {
    heap: BinaryHeap<State>,
}

impl MutableKeyQueue for LazyQueue {
    fn with_capacity(vertices: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(vertices),
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push_or_decrease(&mut self, vertex: VertexId, key: Distance) {
        self.heap.push(State { cost: key, vertex });
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        self.heap.pop().map(|State { cost, vertex }| (vertex, cost))
    }
}
