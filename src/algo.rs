//! Depth-limited quicksort and its small-range helpers.
//!
//! This module implements the Introsort driver, which is a hybrid of:
//! - **Quicksort**: median-of-three pivot, Lomuto partition.
//! - **Heap Sort**: taken over once a range exhausts its depth budget (see [`crate::heap`]).
//! - **Insertion Sort**: fallback for small ranges.
//!
//! The main entry points are [`introsort`] and [`introsort_with`].

use crate::core::SortConfig;
use crate::heap::par_heap_sort_with;
use tracing::{debug, trace};

/// Sorts `data` in place into non-descending order using the default [`SortConfig`].
///
/// The sort is unstable: equal elements may be reordered.
///
/// # Examples
///
/// ```
/// use introsort::introsort;
///
/// let mut data = vec![5, 3, 3, -1, 0];
/// introsort(&mut data);
///
/// assert_eq!(data, vec![-1, 0, 3, 3, 5]);
/// ```
pub fn introsort<T: Ord + Copy + Send>(data: &mut [T]) {
    introsort_with(data, &SortConfig::default());
}

/// Sorts `data` in place with explicit thresholds.
///
/// # Arguments
///
/// * `data` - The slice to sort.
/// * `config` - Insertion sort cutoff, parallel heapify cutoff and depth factor.
///
/// # Examples
///
/// ```
/// use introsort::{introsort_with, SortConfig};
///
/// let mut data: Vec<i64> = (0..100).rev().collect();
/// introsort_with(&mut data, &SortConfig::default().with_insertion_threshold(4));
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn introsort_with<T: Ord + Copy + Send>(data: &mut [T], config: &SortConfig) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let budget = config.depth_budget(len);
    debug!(len, budget, "introsort");
    quicksort(data, budget, config);
}

/// One quicksort step over the range `data` with `depth` descents remaining.
fn quicksort<T: Ord + Copy + Send>(data: &mut [T], depth: usize, config: &SortConfig) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // `high - low` for the range [0, len - 1].
    if len - 1 <= config.insertion_threshold {
        insertion_sort(data);
        return;
    }

    if depth == 0 {
        trace!(len, "depth budget exhausted, falling back to heap sort");
        par_heap_sort_with(data, config.parallel_threshold);
        return;
    }

    let pivot = partition(data);
    let (left, right) = data.split_at_mut(pivot);
    quicksort(left, depth - 1, config);
    // right[0] is the pivot, already in its final place.
    quicksort(&mut right[1..], depth - 1, config);
}

/// Sorts `data` in place by shifting larger elements rightward.
///
/// O(k²) in the worst case, O(k) on nearly sorted input.
///
/// ```
/// use introsort::insertion_sort;
///
/// let mut data = [4, -2, 9, 0];
/// insertion_sort(&mut data);
/// assert_eq!(data, [-2, 0, 4, 9]);
/// ```
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Orders the first, middle and last elements so that the median of the three ends up last.
///
/// After the call `data[0]` holds the minimum of the three samples and `data[len - 1]` the
/// median, which [`partition`] uses as its pivot. Slices shorter than two elements are left
/// untouched.
///
/// ```
/// use introsort::median_of_three;
///
/// let mut data = [9, 0, 1, 0, 5];
/// median_of_three(&mut data);
/// assert_eq!(data, [1, 0, 9, 0, 5]);
/// ```
pub fn median_of_three<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let high = len - 1;
    // Written as low + (high - low) / 2 with low = 0; cannot overflow.
    let mid = high / 2;

    if data[mid] < data[0] {
        data.swap(mid, 0);
    }
    if data[high] < data[0] {
        data.swap(high, 0);
    }
    if data[mid] < data[high] {
        data.swap(mid, high);
    }
}

/// Lomuto partition around the median-of-three pivot.
///
/// Returns the final index `p` of the pivot: every element before `p` is strictly less than
/// the pivot and every element after it is greater than or equal to it.
///
/// # Panics
///
/// Panics if `data` is empty.
///
/// ```
/// use introsort::partition;
///
/// let mut data = [7, 2, 9, 4, 4, 1, 8];
/// let p = partition(&mut data);
///
/// assert!(data[..p].iter().all(|&x| x < data[p]));
/// assert!(data[p + 1..].iter().all(|&x| x >= data[p]));
/// ```
pub fn partition<T: Ord>(data: &mut [T]) -> usize {
    let high = data.len() - 1;
    median_of_three(data);

    // `store` is the Lomuto boundary `i + 1`: data[..store] < pivot.
    let mut store = 0;
    for j in 0..high {
        if data[j] < data[high] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}
