//! Search configuration.

/// Configuration for the exhaustive cycle search.
///
/// The defaults reproduce the reference behaviour: every one of the `n!`
/// vertex orderings is evaluated, sequentially, with no budget.
///
/// # Examples
///
/// ```
/// use u_tsp::brute::BruteConfig;
///
/// let config = BruteConfig::default()
///     .with_fix_first_vertex(true)
///     .with_max_candidates(1_000_000);
/// assert!(config.fix_first_vertex);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct BruteConfig {
    /// Pin vertex 0 to the first position of every candidate.
    ///
    /// Cycle weight is rotation-invariant, so each undirected cycle appears
    /// `n` times among the `n!` orderings as pure rotations. Fixing the
    /// leading vertex removes them, cutting the search to `(n - 1)!`
    /// candidates with an identical minimum. Off by default.
    pub fix_first_vertex: bool,

    /// Hard budget on the number of candidates evaluated. 0 = no limit.
    ///
    /// A budget-stopped run returns the best cycle seen so far with
    /// `complete = false`. With parallel search the budget is shared across
    /// partitions; each partition may evaluate one candidate past it.
    pub max_candidates: usize,

    /// Partition the search across rayon worker threads.
    ///
    /// Ignored unless the `parallel` cargo feature is enabled.
    pub parallel: bool,
}

impl BruteConfig {
    pub fn with_fix_first_vertex(mut self, fix: bool) -> Self {
        self.fix_first_vertex = fix;
        self
    }

    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_exhaustive() {
        let config = BruteConfig::default();
        assert!(!config.fix_first_vertex);
        assert_eq!(config.max_candidates, 0);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder() {
        let config = BruteConfig::default()
            .with_fix_first_vertex(true)
            .with_max_candidates(42)
            .with_parallel(true);
        assert!(config.fix_first_vertex);
        assert_eq!(config.max_candidates, 42);
        assert!(config.parallel);
    }
}
