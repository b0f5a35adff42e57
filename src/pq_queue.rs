/*
Mutable-key queue backed by orx_priority_queue's BinaryHeapWithMap, which tracks each node's slot
in a map and supports decrease-key natively.
*/

use orx_priority_queue::*;

use crate::graph::VertexId;
use crate::queue::{priority, Distance, MutableKeyQueue, Priority};

#[derive(Debug)]
pub struct OrxQueue {
    pq: BinaryHeapWithMap<VertexId, Priority>,
}

impl MutableKeyQueue for OrxQueue {
    fn with_capacity(_vertices: usize) -> Self {
        Self {
            pq: BinaryHeapWithMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.pq.len()
    }

    fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    fn push_or_decrease(&mut self, vertex: VertexId, key: Distance) {
        let key = priority(vertex, key);
        // orx panics when asked to decrease to a greater key.
        if let Some(current) = self.pq.key_of(&vertex) {
            if current <= key {
                return;
            }
        }
        self.pq.decrease_key_or_push(&vertex, key);
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        self.pq.pop().map(|(vertex, (key, _))| (vertex, key.into_inner()))
    }
}
