//! Slice-level max-heap helpers shared by the hand-written heaps
//!
//! Layout is 0-indexed: the children of `i` are `2 * i + 1` and `2 * i + 2`.

/// Index of the parent of `index`. `index` must be non-zero.
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Index of the left child of `index`
#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Rearranges `data` into max-heap order in O(n)
pub(crate) fn heapify<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for index in (0..len / 2).rev() {
        sift_down_swap(data, index);
    }
}

/// Swap-based sift-down used while building a heap
fn sift_down_swap<T: Ord>(data: &mut [T], mut index: usize) {
    let len = data.len();
    loop {
        let left = left_child(index);
        if left >= len {
            break;
        }
        let right = left + 1;
        let larger = if right < len && data[right] > data[left] {
            right
        } else {
            left
        };
        if data[index] >= data[larger] {
            break;
        }
        data.swap(index, larger);
        index = larger;
    }
}

/// Returns true if every parent in `data` is greater than or equal to its children
pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|index| data[parent(index)] >= data[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heapify_small() {
        let mut data = [5, 1, 4, 2, 8, 0, 7, 3];
        heapify(&mut data);
        assert!(is_max_heap(&data));
        assert_eq!(data[0], 8);
    }

    #[test]
    fn test_heapify_trivial_sizes() {
        let mut empty: [u32; 0] = [];
        heapify(&mut empty);
        assert!(is_max_heap(&empty));

        let mut one = [7];
        heapify(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_heapify_ascending_and_duplicates() {
        let mut ascending: Vec<u32> = (0..100).collect();
        heapify(&mut ascending);
        assert!(is_max_heap(&ascending));
        assert_eq!(ascending[0], 99);

        let mut dups = [2, 2, 1, 2, 3, 3, 1];
        heapify(&mut dups);
        assert!(is_max_heap(&dups));
        assert_eq!(dups[0], 3);
    }

    #[test]
    fn test_is_max_heap_rejects_violation() {
        assert!(!is_max_heap(&[1, 2]));
        assert!(!is_max_heap(&[9, 8, 7, 6, 10]));
        assert!(is_max_heap(&[9, 8, 7, 6, 5]));
    }
}
