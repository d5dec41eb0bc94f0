//! Binary min-heap primitives over slices.
//!
//! The working set of the heap-based strategies is a plain slice arranged so
//! that `a[i] <= a[2i + 1]` and `a[i] <= a[2i + 2]` for every valid index.
//! The root (index 0) is therefore the smallest of the current candidates.
//!
//! All functions operate in place and never allocate.

/// Moves the element at `pos` down until the min-heap order holds below it.
///
/// Requires the subtrees rooted at the children of `pos` to already be
/// min-heaps. Does nothing when `pos` is out of bounds.
///
/// # Complexity
/// O(log n)
pub fn sift_down<T: PartialOrd>(heap: &mut [T], mut pos: usize) {
    let len = heap.len();
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }

        // Choose the smaller child.
        let right = left + 1;
        let child = if right < len && heap[right] < heap[left] {
            right
        } else {
            left
        };

        if heap[child] < heap[pos] {
            heap.swap(pos, child);
            pos = child;
        } else {
            break;
        }
    }
}

/// Arranges `data` into a min-heap in linear time.
///
/// # Complexity
/// O(n)
pub fn heapify<T: PartialOrd>(data: &mut [T]) {
    for pos in (0..data.len() / 2).rev() {
        sift_down(data, pos);
    }
}

/// Replaces the root with `value` and restores the heap order.
///
/// The replacement is unconditional: the caller decides whether `value`
/// belongs in the heap. Returns the previous root, or `value` itself when
/// the heap is empty.
///
/// # Complexity
/// O(log n)
pub fn replace_root<T: PartialOrd>(heap: &mut [T], value: T) -> T {
    match heap.first_mut() {
        Some(root) => {
            let old = std::mem::replace(root, value);
            sift_down(heap, 0);
            old
        }
        None => value,
    }
}

/// Pushes `value` and pops the smallest element in one step.
///
/// When `value` is not greater than the root the heap is left untouched and
/// `value` is returned immediately. Otherwise the root is swapped out for
/// `value`, the order is restored and the old root is returned.
///
/// # Complexity
/// O(1) when `value` is rejected, O(log n) otherwise
pub fn push_pop<T: PartialOrd>(heap: &mut [T], mut value: T) -> T {
    if let Some(root) = heap.first_mut() {
        if *root < value {
            std::mem::swap(root, &mut value);
            sift_down(heap, 0);
        }
    }
    value
}

/// Returns `true` when `data` satisfies the min-heap order.
pub fn is_min_heap<T: PartialOrd>(data: &[T]) -> bool {
    !(1..data.len()).any(|i| data[i] < data[(i - 1) / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heapify_establishes_order() {
        let mut data = vec![9, 4, 7, 1, 8, 2, 6, 3, 5];
        heapify(&mut data);
        assert!(is_min_heap(&data));
        assert_eq!(data[0], 1);
    }

    #[test]
    fn test_heapify_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        heapify(&mut empty);
        assert!(is_min_heap(&empty));

        let mut single = vec![42];
        heapify(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_sift_down_from_root() {
        let mut data = vec![1, 2, 3, 4, 5, 6, 7];
        data[0] = 10;
        sift_down(&mut data, 0);
        assert!(is_min_heap(&data));
        assert_eq!(data[0], 2);
    }

    #[test]
    fn test_sift_down_from_inner_index() {
        // Subtree at index 1 is broken, the rest is fine.
        let mut data = vec![1, 9, 3, 4, 5, 6, 7];
        sift_down(&mut data, 1);
        assert!(is_min_heap(&data));
    }

    #[test]
    fn test_sift_down_out_of_bounds_is_noop() {
        let mut data = vec![1, 2, 3];
        sift_down(&mut data, 10);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_root_returns_old_root() {
        let mut data = vec![5, 2, 8, 6, 3];
        heapify(&mut data);
        let old = replace_root(&mut data, 7);
        assert_eq!(old, 2);
        assert!(is_min_heap(&data));
        assert_eq!(data[0], 3);
    }

    #[test]
    fn test_replace_root_is_unconditional() {
        let mut data = vec![5, 6, 7];
        let old = replace_root(&mut data, 1);
        assert_eq!(old, 5);
        assert_eq!(data[0], 1);
    }

    #[test]
    fn test_replace_root_empty_heap() {
        let mut data: Vec<i32> = vec![];
        assert_eq!(replace_root(&mut data, 3), 3);
    }

    #[test]
    fn test_push_pop_rejects_smaller() {
        let mut data = vec![5, 6, 7];
        assert_eq!(push_pop(&mut data, 4), 4);
        assert_eq!(data, vec![5, 6, 7]);

        // Equal to the root is also rejected.
        assert_eq!(push_pop(&mut data, 5), 5);
        assert_eq!(data, vec![5, 6, 7]);
    }

    #[test]
    fn test_push_pop_accepts_larger() {
        let mut data = vec![5, 6, 7];
        assert_eq!(push_pop(&mut data, 10), 5);
        assert!(is_min_heap(&data));
        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, vec![6, 7, 10]);
    }

    #[test]
    fn test_is_min_heap_detects_violation() {
        assert!(is_min_heap(&[1, 2, 3, 4]));
        assert!(!is_min_heap(&[3, 2, 1]));
        assert!(!is_min_heap(&[1, 2, 3, 0]));
    }

    #[test]
    fn test_float_heap() {
        let mut data = vec![2.5, f64::NEG_INFINITY, 1.0, 0.5];
        heapify(&mut data);
        assert!(is_min_heap(&data));
        assert_eq!(data[0], f64::NEG_INFINITY);
    }
}
