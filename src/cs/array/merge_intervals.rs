/// Merges overlapping `[start, end]` intervals.
///
/// Intervals are sorted by start; adjacent intervals that touch
/// (`next.start <= current.end`) are folded together. The result is sorted
/// and pairwise disjoint.
///
/// # Examples
///
/// ```
/// use algokit::cs::array::merge_intervals::merge_intervals;
///
/// let merged = merge_intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
/// assert_eq!(merged, vec![(1, 6), (8, 10), (15, 18)]);
/// ```
pub fn merge_intervals(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|&(start, _)| start);

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged
}
