//! Exact Traveling Salesman solver for small complete graphs.
//!
//! Computes the minimum-weight Hamiltonian cycle of an edge-weighted,
//! undirected, complete graph by exhaustive enumeration of vertex
//! permutations. No pruning, no dynamic programming, no approximation:
//! correctness comes from checking every candidate, which factorial growth
//! limits to roughly a dozen vertices unless a candidate budget or a
//! cancellation token bounds the run.
//!
//! # Modules
//!
//! - [`graph`]: the [`graph::CompleteGraph`] input model — vertex count
//!   plus a total, symmetric pairwise weight lookup.
//! - [`cycle`]: the cycle weight evaluator, scoring one closed ordering.
//! - [`brute`]: the search driver, configuration, and result types.
//! - [`error`]: the [`error::TspError`] taxonomy; every failure is a
//!   deterministic precondition violation surfaced before a wrong number
//!   can escape.
//!
//! # Example
//!
//! ```
//! use u_tsp::brute::minimum_cycle_weight;
//! use u_tsp::graph::CompleteGraph;
//!
//! // A square with cheap diagonals.
//! let g = CompleteGraph::from_edges(
//!     4,
//!     &[
//!         (0, 1, 2.0),
//!         (1, 2, 2.0),
//!         (2, 3, 2.0),
//!         (3, 0, 2.0),
//!         (0, 2, 1.0),
//!         (1, 3, 1.0),
//!     ],
//! );
//!
//! // The best tour zig-zags across both diagonals.
//! assert_eq!(minimum_cycle_weight(&g).unwrap(), 6.0);
//! ```

pub mod brute;
pub mod cycle;
pub mod error;
pub mod graph;
