/// Returns the smallest amount of change that cannot be formed from the
/// given coin values.
///
/// Coins are sorted ascending; walking them in order, if the next coin
/// exceeds the running constructible total plus one there is a gap that no
/// later coin can fill.
///
/// # Examples
///
/// ```
/// use algokit::cs::array::non_constructible_change::non_constructible_change;
///
/// assert_eq!(non_constructible_change(&[5, 7, 1, 1, 2, 3, 22]), 20);
/// assert_eq!(non_constructible_change(&[]), 1);
/// ```
pub fn non_constructible_change(coins: &[u64]) -> u64 {
    let mut coins = coins.to_vec();
    coins.sort_unstable();

    let mut constructible = 0u64;
    for coin in coins {
        if coin > constructible + 1 {
            break;
        }
        constructible += coin;
    }

    constructible + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        assert_eq!(non_constructible_change(&[5, 7, 1, 1, 2, 3, 22]), 20);
        assert_eq!(non_constructible_change(&[1, 1, 1, 1, 1]), 6);
        assert_eq!(non_constructible_change(&[1, 5, 1, 1, 1, 10, 15, 20, 100]), 55);
    }

    #[test]
    fn test_no_coins() {
        assert_eq!(non_constructible_change(&[]), 1);
    }

    #[test]
    fn test_missing_one() {
        assert_eq!(non_constructible_change(&[2, 3, 5]), 1);
    }
}
