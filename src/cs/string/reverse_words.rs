/// Reverses the order of the words in a string, keeping every run of
/// spaces exactly as it appeared.
///
/// The string is cut into alternating word and space tokens and the token
/// list is reversed, so interior spacing travels with the reversal.
///
/// # Examples
///
/// ```
/// use algokit::cs::string::reverse_words::reverse_words;
///
/// assert_eq!(reverse_words("this   string  has words"), "words has  string   this");
/// ```
pub fn reverse_words(s: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut prev_is_space: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_space = c == ' ';
        match prev_is_space {
            Some(prev) if prev != is_space => {
                tokens.push(&s[start..i]);
                start = i;
                prev_is_space = Some(is_space);
            }
            None => prev_is_space = Some(is_space),
            _ => {}
        }
    }
    if !s.is_empty() {
        tokens.push(&s[start..]);
    }

    tokens.iter().rev().copied().collect()
}
