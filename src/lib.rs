//! # Introsort
//!
//! `introsort` is an in-place, unstable hybrid sort for integer sequences (and, more generally,
//! any `Copy` type with a total order).
//!
//! It combines three classical algorithms:
//!
//! - **Quicksort** with median-of-three pivot selection and a Lomuto partition does the bulk of
//!   the work.
//! - **Insertion Sort** finishes ranges of at most 11 elements, where its low overhead wins.
//! - **Heap Sort** takes over any range whose quicksort recursion has run out of depth budget
//!   (`2 * floor(log2(n))` descents), bounding the worst case at O(N log N). Large fallback
//!   ranges are heapified in parallel on the [`rayon`] thread pool.
//!
//! ## Usage
//!
//! ```rust
//! use introsort::introsort;
//!
//! let mut data = vec![5, 3, 3, -1, 0];
//! introsort(&mut data);
//!
//! assert_eq!(data, vec![-1, 0, 3, 3, 5]);
//! ```
//!
//! ### Tuning
//!
//! The small-range cutoff, the parallel heapify cutoff and the depth factor are all
//! configurable through [`SortConfig`].
//!
//! ```rust
//! use introsort::{introsort_with, is_sorted, SortConfig};
//!
//! let config = SortConfig::default()
//!     .with_insertion_threshold(16)
//!     .with_parallel_threshold(4096);
//!
//! let mut data: Vec<i64> = (0..10_000).rev().collect();
//! introsort_with(&mut data, &config);
//!
//! assert!(is_sorted(&data));
//! ```
//!
//! ## Concurrency
//!
//! The parallel heap sorter never shares a mutable handle to the whole slice between tasks.
//! A heap subtree is carried as one disjoint `&mut [T]` per heap level, so two tasks can only
//! ever touch disjoint subtrees and the borrow checker enforces it. Every batch of spawned
//! sift-down tasks is joined before the next dependent step (next extraction, or the move from
//! the build phase to the extraction phase) starts.
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N).
//! - **Worst Case**: O(N log N), guaranteed by the heap-sort fallback.
//! - **Memory Overhead**: O(log N) for recursion and per-task heap views; the input is never
//!   copied.

pub mod algo;
pub mod core;
pub mod heap;
pub mod io;

pub use crate::algo::{insertion_sort, introsort, introsort_with, median_of_three, partition};
pub use crate::core::{SortConfig, depth_budget, first_unsorted, is_sorted};
pub use crate::heap::{heap_sort, par_heap_sort, par_heap_sort_with};

pub mod prelude {
    pub use crate::algo::{introsort, introsort_with};
    pub use crate::core::{SortConfig, is_sorted};
    pub use crate::heap::{heap_sort, par_heap_sort};
}
