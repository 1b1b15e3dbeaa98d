use bitvec::prelude::*;

/// Returns the elements of `values` that are prime, in input order.
///
/// A single Eratosthenes sieve up to the largest input value answers every
/// query; the sieve is a bit vector, so memory stays at one bit per
/// candidate.
///
/// # Examples
///
/// ```
/// use algokit::cs::array::detect_primes::detect_primes;
///
/// assert_eq!(detect_primes(&[10, 7, 2, 9, 13, 1]), vec![7, 2, 13]);
/// ```
pub fn detect_primes(values: &[usize]) -> Vec<usize> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };
    let sieve = sieve_of_eratosthenes(max);
    values.iter().copied().filter(|&v| sieve[v]).collect()
}

/// Builds a bit vector where bit `i` is set iff `i` is prime.
fn sieve_of_eratosthenes(limit: usize) -> BitVec {
    let mut is_prime = bitvec![1; limit + 1];
    is_prime.set(0, false);
    if limit >= 1 {
        is_prime.set(1, false);
    }

    let mut p = 2;
    while p * p <= limit {
        if is_prime[p] {
            let mut multiple = p * p;
            while multiple <= limit {
                is_prime.set(multiple, false);
                multiple += p;
            }
        }
        p += 1;
    }

    is_prime
}
