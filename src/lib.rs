//! pathgraph - shortest paths with tied predecessors over weighted directed graphs
//!
//! Vertices are addressed either by dense integer ids or by arbitrary string
//! labels that an [`graph::IdentifierSpace`] maps onto that dense range. The
//! search engine records, for every vertex, the best known distance from the
//! source together with *every* predecessor achieving it, so all equally short
//! paths can be reconstructed.
//!
//! Graphs are usually loaded from the line-oriented text format in [`io`]:
//!
//! ```text
//! 0 1,5 2,2
//! 1 2,1
//! 2
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, BestPath, SearchSession, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{IdentifierSpace, Vertex, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    NotFound(usize),

    #[error("Graph validation error; vertex {target} referenced in arcs by vertex {vertex}")]
    Validation { vertex: usize, target: usize },

    #[error("Negative arc weight {weight} on arc {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: String },

    #[error("Wrong format on line {line}: {token:?}")]
    Format { line: usize, token: String },

    #[error("Mixed identifier spaces at label {0:?}")]
    MixedMode(String),

    #[error("Unknown vertex label {0:?}")]
    UnknownLabel(String),

    #[error("No label mapped for vertex {0}")]
    Mapping(usize),

    #[error("Mapping fail when exporting vertex {0}")]
    ExportMapping(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("No path from {from} to {to}")]
    NoPath { from: usize, to: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
