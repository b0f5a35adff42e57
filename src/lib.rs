//! Single-source shortest paths over a directed weighted graph.
//!
//! Build a [`Graph`], pick a source vertex and call [`dijkstra::run`]. The result is a
//! [`ShortestPaths`] holding the distance and predecessor of every vertex; the graph itself is
//! never touched by a run.
//!
//! ```
//! use dijkstra_paths::{dijkstra, Graph};
//!
//! let graph = Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)]).unwrap();
//! let a = graph.find("A").unwrap();
//! let c = graph.find("C").unwrap();
//! let paths = dijkstra::run(&graph, a).unwrap();
//! assert_eq!(paths.distance(c), 3.0);
//! assert_eq!(paths.path_to(c).unwrap().len(), 3);
//! ```

pub mod csv_graph;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod indexed_queue;
pub mod keyed_queue;
pub mod lazy_queue;
pub mod logging;
pub mod pq_queue;
pub mod queue;
pub mod shortest_paths;

pub use error::{GraphError, LoadError, UnknownQueueKind};
pub use graph::{Graph, Vertex, VertexId, Weight};
pub use queue::{Distance, MutableKeyQueue, QueueKind};
pub use shortest_paths::{RunStats, ShortestPaths, INFINITY};
