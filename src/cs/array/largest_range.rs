use std::collections::HashMap;

/// Finds the longest range `[start, end]` of consecutive integers contained
/// in the slice (not necessarily adjacent in it).
///
/// Each number seeds an expansion left and right through a visited map, so
/// every value is touched a constant number of times. Returns `None` for an
/// empty slice.
///
/// # Examples
///
/// ```
/// use algokit::cs::array::largest_range::largest_range;
///
/// let arr = [1, 11, 3, 0, 15, 5, 2, 4, 10, 7, 12, 6];
/// assert_eq!(largest_range(&arr), Some((0, 7)));
/// ```
pub fn largest_range(arr: &[i64]) -> Option<(i64, i64)> {
    // Value -> "not yet consumed by an expansion".
    let mut pending: HashMap<i64, bool> = arr.iter().map(|&n| (n, true)).collect();

    let mut best: Option<(i64, i64)> = None;
    let mut best_len = 0u64;

    for &n in arr {
        if !pending.get(&n).copied().unwrap_or(false) {
            continue;
        }
        pending.insert(n, false);

        let mut left = n - 1;
        while let Some(slot) = pending.get_mut(&left) {
            *slot = false;
            left -= 1;
        }
        let mut right = n + 1;
        while let Some(slot) = pending.get_mut(&right) {
            *slot = false;
            right += 1;
        }

        let len = (right - left - 1) as u64;
        if len > best_len {
            best_len = len;
            best = Some((left + 1, right - 1));
        }
    }

    best
}
