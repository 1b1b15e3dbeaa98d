use crate::error::{Error, Result};

/// Counts the distinct multisets of denominations summing to `amount`.
///
/// This is the "unbounded" variant: each denomination may be used any number
/// of times, and order does not matter. Duplicate denominations in the input
/// are treated as a single denomination. An `amount` of zero has exactly one
/// way (use no coins), and an empty denomination set has zero ways for any
/// positive amount.
///
/// Returns an error if any denomination is zero.
///
/// # Examples
///
/// ```
/// use algokit::cs::dynamic::coin_change::count_change_ways;
///
/// // 5; 1+2+2; 1+1+1+2; 1+1+1+1+1
/// assert_eq!(count_change_ways(&[1, 2, 5], 5).unwrap(), 4);
/// assert_eq!(count_change_ways(&[1, 2, 5], 0).unwrap(), 1);
/// assert_eq!(count_change_ways(&[], 5).unwrap(), 0);
/// ```
pub fn count_change_ways(coins: &[usize], amount: usize) -> Result<usize> {
    let coins = normalize_denominations(coins)?;

    // ways[v] is the number of combinations summing to v using the
    // denominations processed so far.
    let mut ways = vec![0usize; amount + 1];
    ways[0] = 1;

    // Denominations form the OUTER loop. Each denomination is folded into
    // every reachable sum before the next one is considered, which counts
    // combinations rather than permutations.
    for coin in coins {
        for value in coin..=amount {
            ways[value] += ways[value - coin];
        }
    }

    Ok(ways[amount])
}

/// Computes the fewest coins (with repetition) summing exactly to `amount`.
///
/// Returns `Ok(None)` when no combination of the given denominations reaches
/// the amount; an unreachable amount is a normal outcome, not an error.
/// Returns an error if any denomination is zero.
///
/// # Examples
///
/// ```
/// use algokit::cs::dynamic::coin_change::min_coins_for_change;
///
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 11).unwrap(), Some(3)); // 5+5+1
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 0).unwrap(), Some(0));
/// assert_eq!(min_coins_for_change(&[2], 3).unwrap(), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    let coins = normalize_denominations(coins)?;

    // amount + 1 exceeds any reachable total (amount unit coins would
    // already suffice), so it doubles as the unreachable marker.
    let unreachable = amount + 1;
    let mut totals = vec![unreachable; amount + 1];
    totals[0] = 0;

    for coin in coins {
        for value in coin..=amount {
            totals[value] = totals[value].min(totals[value - coin] + 1);
        }
    }

    if totals[amount] > amount {
        log::debug!("amount {} is unreachable with the given denominations", amount);
        Ok(None)
    } else {
        Ok(Some(totals[amount]))
    }
}

/// Sorts and deduplicates the denomination set, rejecting zero values.
fn normalize_denominations(coins: &[usize]) -> Result<Vec<usize>> {
    if coins.contains(&0) {
        return Err(Error::invalid_input("denominations must be positive"));
    }
    let mut coins = coins.to_vec();
    coins.sort_unstable();
    coins.dedup();
    Ok(coins)
}
