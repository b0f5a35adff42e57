/*
Mutable-key queue backed by the priority_queue crate. That queue pops the greatest priority, so
priorities are reversed, and `push_increase` on a reversed priority is a decrease-key.
*/

use fnv::FnvBuildHasher;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

use crate::graph::VertexId;
use crate::queue::{priority, Distance, MutableKeyQueue, Priority};

#[derive(Debug)]
pub struct KeyedQueue {
    pq: PriorityQueue<VertexId, Reverse<Priority>, FnvBuildHasher>,
}

impl MutableKeyQueue for KeyedQueue {
    fn with_capacity(vertices: usize) -> Self {
        Self {
            pq: PriorityQueue::with_capacity_and_hasher(vertices, FnvBuildHasher::default()),
        }
    }

    fn len(&self) -> usize {
        self.pq.len()
    }

    fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    fn push_or_decrease(&mut self, vertex: VertexId, key: Distance) {
        self.pq.push_increase(vertex, Reverse(priority(vertex, key)));
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        self.pq
            .pop()
            .map(|(vertex, Reverse((key, _)))| (vertex, key.into_inner()))
    }
}
