/// Searches a sorted slice that has been rotated by an unknown offset.
///
/// At every probe one half of the window is guaranteed to be sorted; the
/// target is either inside that half or the search continues in the other.
/// Elements are assumed distinct.
///
/// # Examples
///
/// ```
/// use algokit::cs::search::shifted_binary_search::shifted_binary_search;
///
/// let arr = [45, 61, 71, 72, 73, 0, 1, 21, 33, 37];
/// assert_eq!(shifted_binary_search(&arr, &33), Some(8));
/// ```
pub fn shifted_binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] == *target {
            return Some(mid);
        }

        if arr[lo] <= arr[mid] {
            // Left half is sorted.
            if arr[lo] <= *target && *target < arr[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else {
            // Right half is sorted.
            if arr[mid] < *target && *target <= arr[hi - 1] {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
    }

    None
}
