/*
Directed weighted graph.

Vertices live in an arena and are addressed by `VertexId`, their position in it. Each vertex keeps
its outgoing edges as a map from neighbor id to weight, so vertices never hold references to each
other. Weights are validated when an edge is registered: the shortest path driver relies on every
weight being finite and non-negative.
*/

use hashbrown::HashMap;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::GraphError;

pub type Weight = f64;

/// Handle of a vertex inside the `Graph` that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    edges: BTreeMap<VertexId, Weight>,
}

impl Vertex {
    fn new(label: String) -> Self {
        Self {
            label,
            edges: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing edges, neighbor -> weight, in neighbor id order.
    pub fn edges(&self) -> &BTreeMap<VertexId, Weight> {
        &self.edges
    }

    pub fn weight_to(&self, neighbor: VertexId) -> Option<Weight> {
        self.edges.get(&neighbor).copied()
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    label_to_id: HashMap<String, VertexId>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            label_to_id: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, creating vertices as their labels show up.
    pub fn from_edges<'a, I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut graph = Graph::new();
        for (from, to, weight) in edges {
            graph.connect(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex, or returns the existing one if the label is already taken.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.label_to_id.get(&label) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(label.clone()));
        self.label_to_id.insert(label, id);
        id
    }

    /// Registers the directed edge `from -> to`. An existing edge between the same pair gets its
    /// weight replaced and the old weight is returned.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError> {
        for endpoint in [from, to] {
            if !self.contains(endpoint) {
                return Err(GraphError::UnknownVertex(endpoint));
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        let vertex = &mut self.vertices[from.0];
        let previous = vertex.edges.insert(to, weight);
        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(previous)
    }

    /// Same as `add_edge`, addressing both endpoints by label and creating them if needed.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError> {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.add_edge(from, to, weight)
    }

    pub fn find(&self, label: &str) -> Option<VertexId> {
        self.label_to_id.get(label).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::label)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// All vertex ids, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (VertexId(i), vertex))
    }

    /// Outgoing edges of `id`; empty for ids from another graph.
    pub fn edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter().map(|(&to, &w)| (to, w)))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
