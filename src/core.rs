//! Core configuration and helpers for Introsort.
//!
//! This module defines:
//! - [`SortConfig`]: The tunable thresholds used by the sort.
//! - [`depth_budget`]: The quicksort recursion allowance for a given length.
//! - [`is_sorted`] / [`first_unsorted`]: The sortedness verifier.

/// Ranges spanning at most this many steps (`high - low`) are finished with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 10;

/// Heaps (or heap subtrees) larger than this are sifted by concurrent tasks.
pub const PARALLEL_HEAPIFY_THRESHOLD: usize = 20;

/// Multiplier applied to `floor(log2(n))` to obtain the depth budget.
pub const DEPTH_FACTOR: usize = 2;

/// Tunable parameters of [`introsort_with`](crate::algo::introsort_with).
///
/// The defaults reproduce the classical configuration: insertion sort below 11 elements,
/// parallel heapify above 20 elements, and a depth budget of `2 * floor(log2(n))`.
///
/// # Examples
///
/// ```
/// use introsort::core::SortConfig;
///
/// let config = SortConfig::default().with_depth_factor(0);
///
/// // A zero depth factor sends every non-trivial range straight to heap sort.
/// let mut data = vec![3, 1, 2];
/// introsort::introsort_with(&mut data, &config);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Largest `high - low` handled by insertion sort.
    pub insertion_threshold: usize,
    /// Largest heap size handled without spawning tasks.
    pub parallel_threshold: usize,
    /// Multiplier for the depth budget.
    pub depth_factor: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            insertion_threshold: INSERTION_SORT_THRESHOLD,
            parallel_threshold: PARALLEL_HEAPIFY_THRESHOLD,
            depth_factor: DEPTH_FACTOR,
        }
    }
}

impl SortConfig {
    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_depth_factor(mut self, factor: usize) -> Self {
        self.depth_factor = factor;
        self
    }

    /// Depth budget for a sequence of `len` elements under this configuration.
    #[inline]
    pub fn depth_budget(&self, len: usize) -> usize {
        depth_budget(len, self.depth_factor)
    }
}

/// Returns `factor * floor(log2(len))`, or 0 when `len <= 1`.
///
/// The logarithm is computed on the integer directly, so no floating point rounding
/// or overflow is involved for any `usize` length.
///
/// ```
/// use introsort::depth_budget;
///
/// assert_eq!(depth_budget(0, 2), 0);
/// assert_eq!(depth_budget(1, 2), 0);
/// assert_eq!(depth_budget(1000, 2), 18);
/// assert_eq!(depth_budget(1024, 2), 20);
/// ```
#[inline]
pub fn depth_budget(len: usize, factor: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    factor.saturating_mul(len.ilog2() as usize)
}

/// Returns `true` if `data` is in non-descending order.
///
/// ```
/// use introsort::is_sorted;
///
/// assert!(is_sorted::<i64>(&[]));
/// assert!(is_sorted(&[-1, 0, 3, 3, 5]));
/// assert!(!is_sorted(&[2, 1]));
/// ```
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    first_unsorted(data).is_none()
}

/// Returns the first index `i` with `data[i] > data[i + 1]`, if any.
pub fn first_unsorted<T: Ord>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|pair| pair[0] > pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_budget_matches_log2() {
        for len in 2..5000usize {
            let expected = 2 * (len as f64).log2().floor() as usize;
            assert_eq!(depth_budget(len, 2), expected, "len {}", len);
        }
    }

    #[test]
    fn test_depth_budget_large_len() {
        assert_eq!(depth_budget(usize::MAX, 2), 2 * (usize::BITS as usize - 1));
        assert_eq!(depth_budget(usize::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfig::default()
            .with_insertion_threshold(3)
            .with_parallel_threshold(7)
            .with_depth_factor(1);
        assert_eq!(config.insertion_threshold, 3);
        assert_eq!(config.parallel_threshold, 7);
        assert_eq!(config.depth_budget(16), 4);
    }

    #[test]
    fn test_first_unsorted() {
        assert_eq!(first_unsorted(&[1, 2, 2, 3]), None);
        assert_eq!(first_unsorted(&[1, 3, 2, 4]), Some(1));
        assert_eq!(first_unsorted::<i32>(&[7]), None);
    }
}
