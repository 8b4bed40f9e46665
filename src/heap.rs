//! Sequential and parallel heap sort.
//!
//! [`heap_sort`] is the textbook in-place heap sort over an implicit max-heap (children of
//! node `i` at `2i + 1` and `2i + 2`). [`par_heap_sort`] produces the same result but sifts
//! large subtrees on the [`rayon`] pool.
//!
//! Nodes of one subtree are not contiguous in the array, so the parallel sorter works on a
//! [`HeapView`]: the heap cut into one slice per level. The subtree rooted at offset `p` of a
//! level occupies offsets `p * 2^j .. (p + 1) * 2^j` of the level `j` steps further down, so
//! splitting a subtree into its two child subtrees just halves every level slice. Each task
//! owns the slices of its own subtree and nothing else.

use crate::core::PARALLEL_HEAPIFY_THRESHOLD;
use rayon::Scope;
use std::mem;

/// Sorts `data` in place with a sequential heap sort.
///
/// O(N log N) regardless of the input distribution.
///
/// ```
/// use introsort::heap_sort;
///
/// let mut data = [3, -7, 3, 0, 12];
/// heap_sort(&mut data);
/// assert_eq!(data, [-7, 0, 3, 3, 12]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(data, len, node);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

/// Restores the max-heap property below `node` within `data[..len]`.
fn sift_down<T: Ord>(data: &mut [T], len: usize, mut node: usize) {
    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }

        let mut largest = node;
        if data[left] > data[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < len && data[right] > data[largest] {
            largest = right;
        }
        if largest == node {
            break;
        }

        data.swap(node, largest);
        node = largest;
    }
}

/// Sorts `data` in place with a heap sort whose sift-downs run as rayon tasks.
///
/// Uses [`PARALLEL_HEAPIFY_THRESHOLD`] as the task cutoff.
///
/// ```
/// use introsort::par_heap_sort;
///
/// let mut data: Vec<i32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
/// par_heap_sort(&mut data);
/// assert_eq!(data, (0..1000).collect::<Vec<_>>());
/// ```
pub fn par_heap_sort<T: Ord + Send>(data: &mut [T]) {
    par_heap_sort_with(data, PARALLEL_HEAPIFY_THRESHOLD);
}

/// Parallel heap sort with an explicit task cutoff.
///
/// Heaps (and subtrees) of at most `threshold` elements are handled inline; larger ones fan
/// out. Build phase: the two child subtrees of a node are heapified concurrently, then the
/// node is sifted down. Extraction phase: each re-heapify runs in its own [`rayon::scope`],
/// which only returns once every sift-down task it spawned has completed, so the next
/// extraction always sees a valid heap.
pub fn par_heap_sort_with<T: Ord + Send>(data: &mut [T], threshold: usize) {
    let len = data.len();
    if len <= threshold.max(1) {
        heap_sort(data);
        return;
    }

    build_heap(HeapView::new(data), threshold);

    for end in (1..len).rev() {
        data.swap(0, end);
        let heap = &mut data[..end];
        if end > threshold {
            let view = HeapView::new(heap);
            rayon::scope(|scope| sift_down_task(view, threshold, scope));
        } else {
            sift_down(heap, end, 0);
        }
    }
}

/// Heapifies the subtree held by `view`, children first.
fn build_heap<T: Ord + Send>(mut view: HeapView<'_, T>, threshold: usize) {
    if view.len() <= threshold {
        view.heapify();
        return;
    }

    {
        let Some((_, left, right)) = view.reborrow().split() else {
            return;
        };
        rayon::join(
            || {
                if let Some(left) = left {
                    build_heap(left, threshold);
                }
            },
            || {
                if let Some(right) = right {
                    build_heap(right, threshold);
                }
            },
        );
    }

    rayon::scope(|scope| sift_down_task(view, threshold, scope));
}

/// Sifts the root of `view` down, handing the descent into the swapped child to a new task.
fn sift_down_task<'s, T: Ord + Send>(view: HeapView<'s, T>, threshold: usize, scope: &Scope<'s>) {
    if view.len() <= threshold {
        let mut view = view;
        view.sift_down(0, 0);
        return;
    }

    let Some((root, left, right)) = view.split() else {
        return;
    };
    let mut child = match (left, right) {
        (Some(left), Some(right)) if right.root() > left.root() => right,
        (Some(left), _) => left,
        _ => return,
    };
    if *child.root() <= *root {
        return;
    }

    mem::swap(root, child.root_mut());
    scope.spawn(move |scope| sift_down_task(child, threshold, scope));
}

/// A heap subtree, stored as one disjoint slice per level.
///
/// `levels[0]` holds exactly the subtree root; level `j` holds at most `2^j` nodes. Levels are
/// never empty.
pub(crate) struct HeapView<'a, T> {
    levels: Vec<&'a mut [T]>,
    len: usize,
}

impl<'a, T: Ord> HeapView<'a, T> {
    /// Cuts an array-backed heap into its levels.
    pub(crate) fn new(mut data: &'a mut [T]) -> Self {
        let len = data.len();
        let mut levels = Vec::with_capacity((usize::BITS - len.leading_zeros()) as usize);
        let mut width = 1usize;
        while !data.is_empty() {
            let take = width.min(data.len());
            let (level, rest) = mem::take(&mut data).split_at_mut(take);
            levels.push(level);
            data = rest;
            width = width.saturating_mul(2);
        }
        Self { levels, len }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    fn root(&self) -> &T {
        &self.levels[0][0]
    }

    fn root_mut(&mut self) -> &mut T {
        &mut self.levels[0][0]
    }

    /// Borrows the same subtree for a shorter lifetime.
    fn reborrow(&mut self) -> HeapView<'_, T> {
        HeapView {
            levels: self.levels.iter_mut().map(|level| &mut **level).collect(),
            len: self.len,
        }
    }

    /// Splits the subtree into its root and the subtrees of its left and right children.
    ///
    /// Returns `None` for an empty view.
    fn split(self) -> Option<(&'a mut T, Option<HeapView<'a, T>>, Option<HeapView<'a, T>>)> {
        let mut levels = self.levels.into_iter();
        let root = levels.next()?.first_mut()?;

        let depth = levels.len();
        let mut left = Vec::with_capacity(depth);
        let mut right = Vec::with_capacity(depth);
        for (offset, level) in levels.enumerate() {
            let half = (1usize << offset).min(level.len());
            let (l, r) = level.split_at_mut(half);
            if !l.is_empty() {
                left.push(l);
            }
            if !r.is_empty() {
                right.push(r);
            }
        }

        Some((root, HeapView::from_levels(left), HeapView::from_levels(right)))
    }

    fn from_levels(levels: Vec<&'a mut [T]>) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        let len = levels.iter().map(|level| level.len()).sum();
        Some(Self { levels, len })
    }

    /// Sequential sift-down of the node at `(depth, pos)`.
    fn sift_down(&mut self, mut depth: usize, mut pos: usize) {
        while depth + 1 < self.levels.len() {
            let below = &self.levels[depth + 1];
            let left = 2 * pos;
            if left >= below.len() {
                break;
            }

            let mut child = left;
            if left + 1 < below.len() && below[left + 1] > below[left] {
                child = left + 1;
            }
            if below[child] <= self.levels[depth][pos] {
                break;
            }

            let (upper, lower) = self.levels.split_at_mut(depth + 1);
            mem::swap(&mut upper[depth][pos], &mut lower[0][child]);
            depth += 1;
            pos = child;
        }
    }

    /// Sequential bottom-up heap construction over the whole view.
    fn heapify(&mut self) {
        for depth in (0..self.levels.len().saturating_sub(1)).rev() {
            for pos in (0..self.levels[depth].len()).rev() {
                self.sift_down(depth, pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_max_heap<T: Ord>(data: &[T]) -> bool {
        (1..data.len()).all(|i| data[(i - 1) / 2] >= data[i])
    }

    fn random_vec(rng: &mut StdRng, len: usize) -> Vec<i64> {
        (0..len).map(|_| rng.random_range(-50..50)).collect()
    }

    #[test]
    fn test_view_levels() {
        let mut data: Vec<i32> = (0..12).collect();
        let view = HeapView::new(&mut data);
        assert_eq!(view.len(), 12);
        let widths: Vec<usize> = view.levels.iter().map(|level| level.len()).collect();
        assert_eq!(widths, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_view_split_matches_index_children() {
        // Value == index, so each subtree's contents can be checked against 2i+1 / 2i+2.
        let mut data: Vec<usize> = (0..12).collect();
        let view = HeapView::new(&mut data);
        let (root, left, right) = view.split().unwrap();
        assert_eq!(*root, 0);

        let left = left.unwrap();
        let right = right.unwrap();
        let left_nodes: Vec<usize> = left.levels.iter().flat_map(|l| l.iter().copied()).collect();
        let right_nodes: Vec<usize> = right.levels.iter().flat_map(|l| l.iter().copied()).collect();
        assert_eq!(left_nodes, vec![1, 3, 4, 7, 8, 9, 10]);
        assert_eq!(right_nodes, vec![2, 5, 6, 11]);
        assert_eq!(left.len(), 7);
        assert_eq!(right.len(), 4);

        let (root, left_left, left_right) = left.split().unwrap();
        assert_eq!(*root, 1);
        assert_eq!(*left_left.unwrap().root(), 3);
        assert_eq!(*left_right.unwrap().root(), 4);
    }

    #[test]
    fn test_view_split_leaf() {
        let mut data = [42];
        let (root, left, right) = HeapView::new(&mut data).split().unwrap();
        assert_eq!(*root, 42);
        assert!(left.is_none());
        assert!(right.is_none());
    }

    #[test]
    fn test_view_heapify() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 1..100 {
            let mut data = random_vec(&mut rng, len);
            HeapView::new(&mut data).heapify();
            assert!(is_max_heap(&data), "len {}", len);
        }
    }

    #[test]
    fn test_parallel_build_heap() {
        let mut rng = StdRng::seed_from_u64(11);
        for len in [21, 64, 100, 1000, 4097] {
            let mut data = random_vec(&mut rng, len);
            build_heap(HeapView::new(&mut data), 4);
            assert!(is_max_heap(&data), "len {}", len);
        }
    }

    #[test]
    fn test_heap_sort_matches_std() {
        let mut rng = StdRng::seed_from_u64(5);
        for len in 0..200 {
            let mut data = random_vec(&mut rng, len);
            let mut expected = data.clone();
            expected.sort_unstable();
            heap_sort(&mut data);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_par_heap_sort_thresholds() {
        let mut rng = StdRng::seed_from_u64(9);
        for threshold in [0, 1, 2, 20, 64] {
            for len in [0, 1, 2, 19, 20, 21, 22, 257, 2000] {
                let mut data = random_vec(&mut rng, len);
                let mut expected = data.clone();
                expected.sort_unstable();
                par_heap_sort_with(&mut data, threshold);
                assert_eq!(data, expected, "len {} threshold {}", len, threshold);
            }
        }
    }
}
