use rand::Rng;

/// Sorts the slice in place with a randomized-pivot quicksort.
///
/// The pivot is drawn uniformly at random each round, so no fixed input
/// can force the quadratic worst case deterministically.
pub fn quicksort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot_index = rand::thread_rng().gen_range(0..arr.len());
    let last = arr.len() - 1;
    arr.swap(pivot_index, last);

    // Lomuto partition against the pivot parked at the end.
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);

    let (left, right) = arr.split_at_mut(store);
    quicksort(left);
    quicksort(&mut right[1..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quicksort() {
        let mut arr = vec![3, 6, 2, 7, 1, 8, 5, 4];
        quicksort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_edges() {
        let mut empty: Vec<i32> = vec![];
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        quicksort(&mut single);
        assert_eq!(single, vec![9]);

        let mut dups = vec![5, 1, 5, 1, 5];
        quicksort(&mut dups);
        assert_eq!(dups, vec![1, 1, 5, 5, 5]);
    }

    #[test]
    fn test_random_inputs_match_std_sort() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let mut arr: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            let mut expected = arr.clone();
            expected.sort_unstable();
            quicksort(&mut arr);
            assert_eq!(arr, expected);
        }
    }
}
