use std::cmp::Ordering;

use rand::Rng;

use crate::error::{Error, Result};

/// Finds the `k`-th smallest element (zero-based) by randomized partition.
///
/// The slice is partially reordered in the process. Returns an error when
/// `k` is out of range for the slice.
///
/// # Examples
///
/// ```
/// use algokit::cs::sort::quickselect::quickselect;
///
/// let mut arr = [9, 1, 7, 3, 5];
/// assert_eq!(*quickselect(&mut arr, 2).unwrap(), 5);
/// ```
pub fn quickselect<T: Ord>(arr: &mut [T], k: usize) -> Result<&T> {
    if k >= arr.len() {
        return Err(Error::invalid_input("k is out of range for the slice"));
    }

    let mut rng = rand::thread_rng();
    let mut lo = 0;
    let mut hi = arr.len();

    loop {
        if hi - lo == 1 {
            return Ok(&arr[lo]);
        }

        let last = hi - 1;
        let pivot_index = rng.gen_range(lo..hi);
        arr.swap(pivot_index, last);

        let mut store = lo;
        for j in lo..last {
            if arr[j] <= arr[last] {
                arr.swap(store, j);
                store += 1;
            }
        }
        arr.swap(store, last);

        match k.cmp(&store) {
            Ordering::Equal => return Ok(&arr[store]),
            Ordering::Less => hi = store,
            Ordering::Greater => lo = store + 1,
        }
    }
}
