//! Exhaustive search execution.

use super::config::BruteConfig;
use super::permute::permutations;
use crate::cycle::cycle_weight;
use crate::error::TspError;
use crate::graph::CompleteGraph;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Result of an exhaustive cycle search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BruteResult {
    /// Minimum cycle weight among the evaluated candidates.
    pub best_weight: f64,

    /// An ordering achieving `best_weight`.
    ///
    /// When several orderings tie, the first one in enumeration order is
    /// kept; rotations and reversals of it describe the same undirected
    /// cycle.
    pub best_cycle: Vec<usize>,

    /// Number of candidate cycles evaluated.
    ///
    /// `n!` for a complete run with default configuration, `(n - 1)!` with
    /// `fix_first_vertex`.
    pub evaluated: usize,

    /// Whether the whole candidate space was enumerated.
    ///
    /// `false` when the run was cancelled or stopped by `max_candidates`;
    /// `best_weight` is then only the minimum over the evaluated prefix.
    pub complete: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Minimum over one partition of the candidate space.
#[derive(Debug, Clone, Default)]
struct PartialSearch {
    best: Option<(f64, Vec<usize>)>,
    evaluated: usize,
    cancelled: bool,
    truncated: bool,
}

/// Executes the brute-force search.
///
/// Enumerates candidate Hamiltonian cycles as permutations of the vertex
/// set, scores each with [`cycle_weight`], and keeps the minimum. Runtime is
/// `O(n! * n)`; anything beyond a dozen or so vertices needs the candidate
/// budget or a cancellation token to stay bounded.
///
/// # Usage
///
/// ```
/// use u_tsp::brute::{BruteConfig, BruteRunner};
/// use u_tsp::graph::CompleteGraph;
///
/// let g = CompleteGraph::from_edges(
///     3,
///     &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)],
/// );
/// let result = BruteRunner::run(&g, &BruteConfig::default()).unwrap();
/// assert_eq!(result.best_weight, 6.0);
/// ```
pub struct BruteRunner;

impl BruteRunner {
    /// Runs the search to completion (or budget exhaustion).
    pub fn run(graph: &CompleteGraph, config: &BruteConfig) -> Result<BruteResult, TspError> {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked after every candidate; a cancelled run returns
    /// the best cycle seen so far with `cancelled = true`. At least one
    /// candidate is always evaluated first, so the result carries a real
    /// minimum rather than a sentinel.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyGraph`] if the graph has no vertices.
    /// - [`TspError::MissingEdgeWeight`] as soon as enumeration touches an
    ///   undefined pair, including the self-loop of a single-vertex graph.
    pub fn run_with_cancel(
        graph: &CompleteGraph,
        config: &BruteConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BruteResult, TspError> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(TspError::EmptyGraph);
        }

        let base: Vec<usize> = if config.fix_first_vertex {
            vec![0]
        } else {
            Vec::new()
        };
        let rest: Vec<usize> = (base.len()..n).collect();

        let counter = AtomicUsize::new(0);
        let cancel = cancel.as_deref();

        let partial = run_search(graph, &base, &rest, cancel, &counter, config)?;

        // Zero evaluated candidates would mean zero permutations, which only
        // an empty graph produces.
        let (best_weight, best_cycle) = partial.best.ok_or(TspError::EmptyGraph)?;

        Ok(BruteResult {
            best_weight,
            best_cycle,
            evaluated: partial.evaluated,
            complete: !partial.cancelled && !partial.truncated,
            cancelled: partial.cancelled,
        })
    }
}

/// Minimum cycle weight of `graph` under the default configuration.
///
/// Convenience wrapper for callers that only need the scalar.
pub fn minimum_cycle_weight(graph: &CompleteGraph) -> Result<f64, TspError> {
    BruteRunner::run(graph, &BruteConfig::default()).map(|result| result.best_weight)
}

fn run_search(
    graph: &CompleteGraph,
    base: &[usize],
    rest: &[usize],
    cancel: Option<&AtomicBool>,
    counter: &AtomicUsize,
    config: &BruteConfig,
) -> Result<PartialSearch, TspError> {
    #[cfg(feature = "parallel")]
    if config.parallel && rest.len() > 1 {
        return run_parallel(graph, base, rest, cancel, counter, config.max_candidates);
    }

    search_with_prefix(graph, base, rest, cancel, counter, config.max_candidates)
}

/// Sequentially scores every candidate `base ++ p(rest)` for permutations
/// `p`, sharing the evaluated-candidate counter with sibling partitions.
fn search_with_prefix(
    graph: &CompleteGraph,
    prefix: &[usize],
    rest: &[usize],
    cancel: Option<&AtomicBool>,
    counter: &AtomicUsize,
    max_candidates: usize,
) -> Result<PartialSearch, TspError> {
    let mut partial = PartialSearch::default();
    let mut candidate: Vec<usize> = Vec::with_capacity(prefix.len() + rest.len());
    let mut perms = permutations(rest.len()).peekable();

    while let Some(perm) = perms.next() {
        candidate.clear();
        candidate.extend_from_slice(prefix);
        candidate.extend(perm.into_iter().map(|i| rest[i]));

        let weight = cycle_weight(graph, &candidate)?;
        partial.evaluated += 1;
        let total = counter.fetch_add(1, Ordering::Relaxed) + 1;

        if partial
            .best
            .as_ref()
            .is_none_or(|(best, _)| weight < *best)
        {
            partial.best = Some((weight, candidate.clone()));
        }

        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                partial.cancelled = true;
                break;
            }
        }
        if max_candidates > 0 && total >= max_candidates && perms.peek().is_some() {
            partial.truncated = true;
            break;
        }
    }

    Ok(partial)
}

/// Partitions the candidate space by the vertex following `base` and scores
/// the partitions on rayon workers, keeping a local minimum per partition
/// and reducing at the end. The graph is only read, so partitions share it
/// freely.
#[cfg(feature = "parallel")]
fn run_parallel(
    graph: &CompleteGraph,
    base: &[usize],
    rest: &[usize],
    cancel: Option<&AtomicBool>,
    counter: &AtomicUsize,
    max_candidates: usize,
) -> Result<PartialSearch, TspError> {
    use rayon::prelude::*;

    let branches: Vec<(Vec<usize>, Vec<usize>)> = rest
        .iter()
        .map(|&lead| {
            let mut prefix = base.to_vec();
            prefix.push(lead);
            let tail: Vec<usize> = rest.iter().copied().filter(|&v| v != lead).collect();
            (prefix, tail)
        })
        .collect();

    let partials: Vec<Result<PartialSearch, TspError>> = branches
        .par_iter()
        .map(|(prefix, tail)| {
            search_with_prefix(graph, prefix, tail, cancel, counter, max_candidates)
        })
        .collect();

    let mut merged = PartialSearch::default();
    for partial in partials {
        let partial = partial?;
        merged.evaluated += partial.evaluated;
        merged.cancelled |= partial.cancelled;
        merged.truncated |= partial.truncated;
        if let Some((weight, cycle)) = partial.best {
            if merged
                .best
                .as_ref()
                .is_none_or(|(best, _)| weight < *best)
            {
                merged.best = Some((weight, cycle));
            }
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_with_diagonals() -> CompleteGraph {
        CompleteGraph::from_edges(
            4,
            &[
                (0, 1, 2.0),
                (1, 2, 2.0),
                (2, 3, 2.0),
                (3, 0, 2.0),
                (0, 2, 1.0),
                (1, 3, 1.0),
            ],
        )
    }

    #[test]
    fn test_square_minimum_is_six() {
        let g = square_with_diagonals();
        let result = BruteRunner::run(&g, &BruteConfig::default()).unwrap();

        assert_eq!(result.best_weight, 6.0);
        assert_eq!(result.evaluated, 24);
        assert!(result.complete);
        assert!(!result.cancelled);
        // The reported cycle must actually achieve the reported weight.
        assert_eq!(cycle_weight(&g, &result.best_cycle).unwrap(), 6.0);
    }

    #[test]
    fn test_minimum_cycle_weight_convenience() {
        assert_eq!(minimum_cycle_weight(&square_with_diagonals()).unwrap(), 6.0);
    }

    #[test]
    fn test_fix_first_vertex_same_minimum_fewer_candidates() {
        let g = square_with_diagonals();
        let config = BruteConfig::default().with_fix_first_vertex(true);
        let result = BruteRunner::run(&g, &config).unwrap();

        assert_eq!(result.best_weight, 6.0);
        assert_eq!(result.evaluated, 6); // (4 - 1)!
        assert_eq!(result.best_cycle[0], 0);
        assert!(result.complete);
    }

    #[test]
    fn test_empty_graph_is_an_error() {
        let g = CompleteGraph::new(0);
        assert!(matches!(
            BruteRunner::run(&g, &BruteConfig::default()),
            Err(TspError::EmptyGraph)
        ));
    }

    #[test]
    fn test_single_vertex_has_no_defined_cycle() {
        let g = CompleteGraph::new(1);
        assert_eq!(
            BruteRunner::run(&g, &BruteConfig::default()).unwrap_err(),
            TspError::MissingEdgeWeight { u: 0, v: 0 }
        );
    }

    #[test]
    fn test_two_vertices() {
        let g = CompleteGraph::from_edges(2, &[(0, 1, 5.0)]);
        let result = BruteRunner::run(&g, &BruteConfig::default()).unwrap();
        // Both orderings traverse the single edge out and back.
        assert_eq!(result.best_weight, 10.0);
        assert_eq!(result.evaluated, 2);
    }

    #[test]
    fn test_incomplete_graph_propagates_missing_edge() {
        let g = CompleteGraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        assert!(matches!(
            BruteRunner::run(&g, &BruteConfig::default()),
            Err(TspError::MissingEdgeWeight { .. })
        ));
    }

    #[test]
    fn test_cancellation_returns_best_so_far() {
        let g = square_with_diagonals();
        // Flag set up front: the run must still evaluate one candidate and
        // report a real weight.
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            BruteRunner::run_with_cancel(&g, &BruteConfig::default(), Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert!(!result.complete);
        assert_eq!(result.evaluated, 1);
        assert!(result.best_weight.is_finite());
        assert_eq!(
            cycle_weight(&g, &result.best_cycle).unwrap(),
            result.best_weight
        );
    }

    #[test]
    fn test_candidate_budget_truncates() {
        let g = square_with_diagonals();
        let config = BruteConfig::default().with_max_candidates(5);
        let result = BruteRunner::run(&g, &config).unwrap();

        assert_eq!(result.evaluated, 5);
        assert!(!result.complete);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_exact_budget_still_complete() {
        let g = square_with_diagonals();
        let config = BruteConfig::default().with_max_candidates(24);
        let result = BruteRunner::run(&g, &config).unwrap();

        assert_eq!(result.evaluated, 24);
        assert!(result.complete);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let g = square_with_diagonals();
        let sequential = BruteRunner::run(&g, &BruteConfig::default()).unwrap();
        let parallel =
            BruteRunner::run(&g, &BruteConfig::default().with_parallel(true)).unwrap();

        assert_eq!(parallel.best_weight, sequential.best_weight);
        assert_eq!(parallel.evaluated, sequential.evaluated);
        assert!(parallel.complete);
    }

    // ---- Minimality: the reported minimum never exceeds any valid cycle. ----

    fn complete_graph() -> impl Strategy<Value = CompleteGraph> {
        (3usize..6).prop_flat_map(|n| {
            let pairs = n * (n - 1) / 2;
            proptest::collection::vec(0.0f64..100.0, pairs).prop_map(move |weights| {
                let mut g = CompleteGraph::new(n);
                let mut k = 0;
                for u in 0..n {
                    for v in (u + 1)..n {
                        g.set_weight(u, v, weights[k]);
                        k += 1;
                    }
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn prop_minimality_and_exhaustiveness(g in complete_graph()) {
            let n = g.vertex_count();
            let result = BruteRunner::run(&g, &BruteConfig::default()).unwrap();

            let factorial: usize = (1..=n).product();
            prop_assert_eq!(result.evaluated, factorial);
            prop_assert!(result.complete);

            // Identity and reversed identity are valid cycles; neither may
            // beat the reported minimum.
            let identity: Vec<usize> = (0..n).collect();
            let reversed: Vec<usize> = (0..n).rev().collect();
            prop_assert!(result.best_weight <= cycle_weight(&g, &identity).unwrap() + 1e-9);
            prop_assert!(result.best_weight <= cycle_weight(&g, &reversed).unwrap() + 1e-9);
        }

        #[test]
        fn prop_fixed_first_agrees_with_full_sweep(g in complete_graph()) {
            let full = BruteRunner::run(&g, &BruteConfig::default()).unwrap();
            let fixed = BruteRunner::run(
                &g,
                &BruteConfig::default().with_fix_first_vertex(true),
            )
            .unwrap();

            prop_assert!((full.best_weight - fixed.best_weight).abs() < 1e-9);
        }
    }
}
