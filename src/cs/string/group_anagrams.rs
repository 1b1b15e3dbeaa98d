use std::collections::HashMap;

/// Groups words that are anagrams of one another.
///
/// Words are keyed by their sorted characters. Groups appear in the order
/// their first member appears in the input, and members keep input order,
/// so the result is deterministic.
///
/// # Examples
///
/// ```
/// use algokit::cs::string::group_anagrams::group_anagrams;
///
/// let groups = group_anagrams(&["yo", "act", "flop", "tac", "oy", "olfp"]);
/// assert_eq!(groups, vec![vec!["yo", "oy"], vec!["act", "tac"], vec!["flop", "olfp"]]);
/// ```
pub fn group_anagrams<'a>(words: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut index: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&str>> = Vec::new();

    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();

        match index.get(&key) {
            Some(&slot) => groups[slot].push(word),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![word]);
            }
        }
    }

    groups
}
