/*
Indexed binary min-heap with decrease-key.

Keys are kept in an arena indexed by vertex id rather than inside the heap, and every heap slot is
only a vertex id. Comparisons read the arena, so they always see a vertex's current key. Lowering a
key goes through `push_or_decrease`, which sifts the vertex up from the slot recorded in
`positions`; this keeps at most one entry per vertex and the heap valid at every pop.

Push, decrease and pop are O(log n).
*/

use crate::graph::VertexId;
use crate::queue::{priority, Distance, MutableKeyQueue};

const ABSENT: usize = usize::MAX;

#[derive(Debug, Default)]
pub struct IndexedQueue {
    heap: Vec<VertexId>,
    // vertex index -> slot in `heap`, or ABSENT.
    positions: Vec<usize>,
    // vertex index -> current key. Only meaningful while the vertex is queued.
    keys: Vec<Distance>,
}

impl IndexedQueue {
    fn contains(&self, vertex: VertexId) -> bool {
        self.positions
            .get(vertex.index())
            .is_some_and(|&slot| slot != ABSENT)
    }

    fn key_of(&self, vertex: VertexId) -> Option<Distance> {
        if self.contains(vertex) {
            Some(self.keys[vertex.index()])
        } else {
            None
        }
    }

    fn ensure_slot(&mut self, vertex: VertexId) {
        let needed = vertex.index() + 1;
        if self.positions.len() < needed {
            self.positions.resize(needed, ABSENT);
            self.keys.resize(needed, Distance::INFINITY);
        }
    }

    #[inline(always)]
    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (self.heap[a], self.heap[b]);
        priority(a, self.keys[a.index()]) < priority(b, self.keys[b.index()])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].index()] = a;
        self.positions[self.heap[b].index()] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

impl MutableKeyQueue for IndexedQueue {
    fn with_capacity(vertices: usize) -> Self {
        Self {
            heap: Vec::with_capacity(vertices),
            positions: vec![ABSENT; vertices],
            keys: vec![Distance::INFINITY; vertices],
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push_or_decrease(&mut self, vertex: VertexId, key: Distance) {
        match self.key_of(vertex) {
            None => {
                self.ensure_slot(vertex);
                self.keys[vertex.index()] = key;
                self.heap.push(vertex);
                let last = self.heap.len() - 1;
                self.positions[vertex.index()] = last;
                self.sift_up(last);
            }
            Some(current) if key < current => {
                self.keys[vertex.index()] = key;
                self.sift_up(self.positions[vertex.index()]);
            }
            Some(_) => {}
        }
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.positions[top.index()] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top, self.keys[top.index()]))
    }
}
