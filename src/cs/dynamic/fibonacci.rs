/// Returns the `n`-th Fibonacci number (`fibonacci(0) == 0`).
///
/// Iterative pair rolling; `n` up to 93 fits in a `u64`, larger values
/// overflow in debug builds.
///
/// # Examples
///
/// ```
/// use algokit::cs::dynamic::fibonacci::fibonacci;
///
/// assert_eq!(fibonacci(10), 55);
/// ```
pub fn fibonacci(n: u32) -> u64 {
    let mut pair = (0u64, 1u64);
    for _ in 0..n {
        pair = (pair.1, pair.0 + pair.1);
    }
    pair.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Textbook doubly-recursive definition, baseline for the iterative form.
    fn fibonacci_naive(n: u32) -> u64 {
        match n {
            0 => 0,
            1 => 1,
            _ => fibonacci_naive(n - 1) + fibonacci_naive(n - 2),
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(50), 12_586_269_025);
        assert_eq!(fibonacci(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_matches_naive_baseline() {
        for n in 0..=25 {
            assert_eq!(fibonacci(n), fibonacci_naive(n));
        }
    }
}
