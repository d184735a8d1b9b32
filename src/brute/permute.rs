//! Lexicographic permutation enumeration.

/// Iterator over all permutations of `0..n`, in lexicographic order.
///
/// Yields `n!` items; the degenerate `n == 0` case yields the single empty
/// permutation. Each item is an owned `Vec` so the driver can splice the
/// indices into a candidate cycle without lifetime coupling.
pub(crate) struct Permutations {
    next: Option<Vec<usize>>,
}

/// All permutations of `0..n`, starting from the identity.
pub(crate) fn permutations(n: usize) -> Permutations {
    Permutations {
        next: Some((0..n).collect()),
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }
}

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns `false` when `perm` is already the last (descending) permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix; the element before it is the pivot.
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    // Rightmost element greater than the pivot.
    let mut j = perm.len() - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }

    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts_are_factorial() {
        assert_eq!(permutations(0).count(), 1);
        assert_eq!(permutations(1).count(), 1);
        assert_eq!(permutations(2).count(), 2);
        assert_eq!(permutations(4).count(), 24);
        assert_eq!(permutations(6).count(), 720);
    }

    #[test]
    fn test_lexicographic_order_n3() {
        let all: Vec<Vec<usize>> = permutations(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_all_distinct_and_valid() {
        let all: HashSet<Vec<usize>> = permutations(5).collect();
        assert_eq!(all.len(), 120);
        for perm in &all {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_zero_yields_empty_permutation() {
        let all: Vec<Vec<usize>> = permutations(0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }
}
