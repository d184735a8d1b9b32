//! Error types for graph queries and the exhaustive search.

use thiserror::Error;

/// Errors surfaced by the evaluator, the search driver, and graph helpers.
///
/// Every variant is a deterministic precondition violation, detected before
/// any enumeration work proceeds. None are transient; retrying with the same
/// input fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TspError {
    /// The candidate cycle is not a permutation of the vertex set
    /// (wrong length, repeated vertex, or out-of-range vertex).
    #[error("cycle is not a permutation of the {expected} graph vertices (got {actual} entries)")]
    InvalidCycleLength {
        /// Number of vertices in the graph.
        expected: usize,
        /// Number of entries in the rejected cycle.
        actual: usize,
    },

    /// No weight is defined for the requested vertex pair.
    ///
    /// Raised when the graph is incomplete, or when a traversal asks for a
    /// self-loop (`u == v`), which is never defined.
    #[error("no edge weight defined between vertices {u} and {v}")]
    MissingEdgeWeight {
        /// First endpoint of the missing edge.
        u: usize,
        /// Second endpoint of the missing edge.
        v: usize,
    },

    /// The search was invoked on a graph with zero vertices.
    #[error("minimum cycle weight is undefined for an empty graph")]
    EmptyGraph,

    /// The average-weight helper needs at least two vertices.
    #[error("average edge weight is undefined for a graph with {vertices} vertex(es)")]
    DegenerateGraph {
        /// Actual vertex count of the rejected graph.
        vertices: usize,
    },
}
