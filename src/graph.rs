//! Complete weighted graph model.
//!
//! [`CompleteGraph`] is the only input the solver consumes: a vertex count
//! and a total, symmetric weight lookup over distinct vertex pairs. How the
//! graph is obtained (files, distance matrices, geometry) is the caller's
//! concern.

use crate::error::TspError;

/// An undirected graph on vertices `0..n` with symmetric edge weights.
///
/// Weights are stored as a dense `n x n` matrix of optional `f64` values.
/// Setting a weight stores both orientations, so `weight(u, v)` always
/// equals `weight(v, u)`. Self-loops are never defined; the diagonal stays
/// absent and a lookup with `u == v` returns `None`.
///
/// The solver assumes the graph is complete (every distinct pair has a
/// weight). Incomplete graphs are accepted at construction time and reported
/// as [`TspError::MissingEdgeWeight`] when a traversal first touches an
/// undefined pair. Non-negative weights are the caller's contract and are
/// not enforced.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CompleteGraph;
///
/// let mut g = CompleteGraph::new(3);
/// g.set_weight(0, 1, 2.0);
/// g.set_weight(1, 2, 3.0);
/// g.set_weight(0, 2, 4.0);
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.weight(2, 1), Some(3.0));
/// assert!(g.is_complete());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteGraph {
    vertices: usize,
    weights: Vec<Option<f64>>,
}

impl CompleteGraph {
    /// Creates a graph with `vertices` vertices and no edge weights defined.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            weights: vec![None; vertices * vertices],
        }
    }

    /// Creates a graph from an explicit edge list.
    ///
    /// # Panics
    ///
    /// Panics if any edge references an out-of-range vertex or is a
    /// self-loop, as [`set_weight`](Self::set_weight) does.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Self::new(vertices);
        for &(u, v, w) in edges {
            graph.set_weight(u, v, w);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Sets the weight of the undirected edge `{u, v}` (both orientations).
    ///
    /// Overwrites any previously set weight for the pair.
    ///
    /// # Panics
    ///
    /// Panics if `u == v` or either vertex is out of range. Both are
    /// construction bugs in the caller, not recoverable solver inputs.
    pub fn set_weight(&mut self, u: usize, v: usize, weight: f64) {
        assert!(
            u < self.vertices && v < self.vertices,
            "edge ({u}, {v}) references a vertex outside 0..{}",
            self.vertices
        );
        assert!(u != v, "self-loop ({u}, {u}) is not a valid edge");
        self.weights[u * self.vertices + v] = Some(weight);
        self.weights[v * self.vertices + u] = Some(weight);
    }

    /// Returns the weight of the edge `{u, v}`, or `None` if it is
    /// undefined.
    ///
    /// Out-of-range vertices and self-loops are reported as `None` rather
    /// than panicking, so callers can turn an absent weight into a typed
    /// error with edge context.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        if u == v || u >= self.vertices || v >= self.vertices {
            return None;
        }
        self.weights[u * self.vertices + v]
    }

    /// Whether every distinct vertex pair has a defined weight.
    pub fn is_complete(&self) -> bool {
        (0..self.vertices)
            .all(|u| (0..u).all(|v| self.weights[u * self.vertices + v].is_some()))
    }

    /// Average pairwise edge weight scaled to cycle length:
    /// `2 * sum(w(i, j) for i < j) / (n - 1)`.
    ///
    /// A complete graph's Hamiltonian cycle has `n` edges; scaling the mean
    /// pairwise weight by `2 / (n - 1)` per pair gives the expected weight
    /// of a uniformly random cycle, a baseline to compare a found minimum
    /// against. It is not a bound.
    ///
    /// # Errors
    ///
    /// - [`TspError::DegenerateGraph`] if the graph has fewer than two
    ///   vertices (`n - 1` divides).
    /// - [`TspError::MissingEdgeWeight`] if any distinct pair is undefined.
    pub fn average_edge_weight(&self) -> Result<f64, TspError> {
        let n = self.vertices;
        if n <= 1 {
            return Err(TspError::DegenerateGraph { vertices: n });
        }

        let mut sum = 0.0;
        for u in 0..n {
            for v in 0..u {
                sum += self
                    .weight(u, v)
                    .ok_or(TspError::MissingEdgeWeight { u, v })?;
            }
        }

        Ok(sum * 2.0 / (n - 1) as f64)
    }
}
