use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Errors raised while building a graph or starting a run over it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be finite and non-negative")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("vertex {0} does not belong to this graph")]
    UnknownVertex(VertexId),

    #[error("path length through edge {from} -> {to} exceeds the largest representable distance")]
    DistanceOverflow { from: VertexId, to: VertexId },
}

/// Errors raised while reading a graph from CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: cannot parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    Graph {
        line: u64,
        #[source]
        source: GraphError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown queue {0:?}, possible options are: (\"indexed\", \"lazy\", \"orx\", \"keyed\")")]
pub struct UnknownQueueKind(pub String);
