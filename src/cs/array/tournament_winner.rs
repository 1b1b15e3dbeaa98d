use std::collections::HashMap;

/// Decides the winner of a round-robin tournament.
///
/// `competitions` lists `(home, away)` pairs; `results[i]` is `true` when
/// the home team won match `i`. Three points per win, the running leader is
/// tracked as results stream in, and ties keep the earlier leader. Returns
/// `None` when the inputs are empty or their lengths differ.
///
/// # Examples
///
/// ```
/// use algokit::cs::array::tournament_winner::tournament_winner;
///
/// let competitions = [("HTML", "C#"), ("C#", "Python"), ("Python", "HTML")];
/// let results = [false, false, true];
/// assert_eq!(tournament_winner(&competitions, &results), Some("Python".to_string()));
/// ```
pub fn tournament_winner(competitions: &[(&str, &str)], results: &[bool]) -> Option<String> {
    if competitions.is_empty() || competitions.len() != results.len() {
        return None;
    }

    let mut scores: HashMap<&str, u64> = HashMap::new();
    let mut best: Option<(&str, u64)> = None;

    for (&(home, away), &home_won) in competitions.iter().zip(results) {
        let winner = if home_won { home } else { away };
        let score = scores.entry(winner).or_insert(0);
        *score += 3;

        if best.map_or(true, |(_, top)| *score > top) {
            best = Some((winner, *score));
        }
    }

    best.map(|(team, _)| team.to_string())
}
