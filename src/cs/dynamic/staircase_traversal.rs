use crate::error::{Error, Result};

/// Counts the ways to climb a staircase of `height` steps taking between 1
/// and `max_step` steps at a time.
///
/// The table is filled with a sliding window over the last `max_step`
/// entries, so the whole computation is O(height) time. A height of zero has
/// exactly one way (stand still). A `max_step` of zero is rejected.
///
/// # Examples
///
/// ```
/// use algokit::cs::dynamic::staircase_traversal::staircase_ways;
///
/// assert_eq!(staircase_ways(4, 2).unwrap(), 5);
/// assert_eq!(staircase_ways(0, 3).unwrap(), 1);
/// ```
pub fn staircase_ways(height: usize, max_step: usize) -> Result<usize> {
    if max_step == 0 {
        return Err(Error::invalid_input("max_step must be positive"));
    }

    let mut ways = vec![0usize; height + 1];
    ways[0] = 1;

    // window holds the sum of the last max_step table entries.
    let mut window = 0usize;
    for h in 1..=height {
        window += ways[h - 1];
        if h > max_step {
            window -= ways[h - max_step - 1];
        }
        ways[h] = window;
    }

    Ok(ways[height])
}
