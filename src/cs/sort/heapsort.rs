/// Sorts the slice in place with a bottom-up binary max-heap.
///
/// O(n log n) worst case, no allocation, not stable.
///
/// # Examples
///
/// ```
/// use algokit::cs::sort::heapsort::heapsort;
///
/// let mut arr = [4, 10, 3, 5, 1];
/// heapsort(&mut arr);
/// assert_eq!(arr, [1, 3, 4, 5, 10]);
/// ```
pub fn heapsort<T: Ord>(arr: &mut [T]) {
    // Heapify from the last parent down.
    for start in (0..arr.len() / 2).rev() {
        sift_down(arr, start, arr.len());
    }

    // Repeatedly move the max to the back and restore the heap.
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        sift_down(arr, 0, end);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            break;
        }
        let mut child = left;
        if left + 1 < end && arr[left + 1] > arr[left] {
            child = left + 1;
        }
        if arr[root] >= arr[child] {
            break;
        }
        arr.swap(root, child);
        root = child;
    }
}
