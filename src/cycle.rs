//! Cycle weight evaluation.
//!
//! The evaluator is the leaf of the solver: given a graph and one ordering
//! of its vertices, it returns the total weight of walking that ordering as
//! a closed loop. The search driver calls it once per candidate.

use crate::error::TspError;
use crate::graph::CompleteGraph;

/// Computes the total weight of traversing `cycle` as a closed loop.
///
/// The cycle must be a permutation of the graph's vertex set. The loop is
/// closed implicitly: after the last vertex the walk returns to the first,
/// so a cycle of `n` vertices sums exactly `n` edge weights. For `n == 2`
/// the single edge is therefore counted twice (out and back).
///
/// Weights accumulate in `f64`; the natural range of the type is the only
/// overflow protection, which is ample for any graph small enough to
/// enumerate.
///
/// # Errors
///
/// - [`TspError::InvalidCycleLength`] if `cycle` has the wrong length,
///   repeats a vertex, or references a vertex outside the graph.
/// - [`TspError::MissingEdgeWeight`] if any traversed pair has no defined
///   weight. A single-vertex graph always fails this way: its only cycle
///   `[0]` closes over the self-loop `(0, 0)`, which is never defined.
///
/// # Examples
///
/// ```
/// use u_tsp::cycle::cycle_weight;
/// use u_tsp::graph::CompleteGraph;
///
/// let g = CompleteGraph::from_edges(
///     3,
///     &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)],
/// );
/// assert_eq!(cycle_weight(&g, &[0, 1, 2]).unwrap(), 6.0);
/// ```
pub fn cycle_weight(graph: &CompleteGraph, cycle: &[usize]) -> Result<f64, TspError> {
    let n = graph.vertex_count();
    if cycle.len() != n {
        return Err(TspError::InvalidCycleLength {
            expected: n,
            actual: cycle.len(),
        });
    }

    let mut seen = vec![false; n];
    for &vertex in cycle {
        if vertex >= n || seen[vertex] {
            return Err(TspError::InvalidCycleLength {
                expected: n,
                actual: cycle.len(),
            });
        }
        seen[vertex] = true;
    }

    let mut total = 0.0;
    for i in 0..cycle.len() {
        let u = cycle[i];
        let v = if i + 1 == cycle.len() {
            cycle[0]
        } else {
            cycle[i + 1]
        };
        total += graph
            .weight(u, v)
            .ok_or(TspError::MissingEdgeWeight { u, v })?;
    }

    Ok(total)
}
