use std::cmp::Ordering;

/// Searches a sorted slice for `target`, returning its index.
///
/// The slice must be sorted ascending; the result is unspecified otherwise.
/// When `target` occurs more than once, any matching index may be returned.
///
/// # Examples
///
/// ```
/// use algokit::cs::search::binary_search::binary_search;
///
/// let arr = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&arr, &7), Some(3));
/// assert_eq!(binary_search(&arr, &4), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let arr: [i32; 0] = [];
        assert_eq!(binary_search(&arr, &1), None);
    }

    #[test]
    fn test_present() {
        let arr = [1, 3, 5, 7, 9, 11];
        for (i, v) in arr.iter().enumerate() {
            assert_eq!(binary_search(&arr, v), Some(i));
        }
    }

    #[test]
    fn test_absent() {
        let arr = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&arr, &0), None);
        assert_eq!(binary_search(&arr, &4), None);
        assert_eq!(binary_search(&arr, &12), None);
    }

    #[test]
    fn test_strings() {
        let arr = ["apple", "banana", "cherry"];
        assert_eq!(binary_search(&arr, &"banana"), Some(1));
        assert_eq!(binary_search(&arr, &"durian"), None);
    }
}
