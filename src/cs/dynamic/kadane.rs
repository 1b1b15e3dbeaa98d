use num_traits::Signed;

/// Kadane's algorithm for the maximum subarray sum.
///
/// Works over any signed integer type. Returns `None` for an empty slice;
/// for an all-negative slice the answer is the largest single element.
///
/// # Examples
///
/// ```
/// use algokit::cs::dynamic::kadane::kadane;
///
/// let arr: [i64; 5] = [1, -2, 3, 5, -1];
/// assert_eq!(kadane(&arr), Some(8)); // the subarray [3, 5]
/// ```
pub fn kadane<T>(arr: &[T]) -> Option<T>
where
    T: Signed + Ord + Copy,
{
    let mut iter = arr.iter().copied();
    let first = iter.next()?;

    let mut current_sum = first;
    let mut max_sum = first;
    for val in iter {
        // Either extend the running subarray or start fresh at `val`.
        current_sum = current_sum.max(T::zero()) + val;
        max_sum = max_sum.max(current_sum);
    }

    Some(max_sum)
}
