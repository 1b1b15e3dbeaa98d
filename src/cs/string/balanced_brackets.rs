/// Checks whether every bracket in the string is matched and properly
/// nested.
///
/// Handles `()`, `[]` and `{}`; all other characters are ignored.
///
/// # Examples
///
/// ```
/// use algokit::cs::string::balanced_brackets::balanced_brackets;
///
/// assert!(balanced_brackets("([]){}"));
/// assert!(!balanced_brackets("([)]"));
/// ```
pub fn balanced_brackets(s: &str) -> bool {
    let mut stack = Vec::new();

    for c in s.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert!(balanced_brackets(""));
        assert!(balanced_brackets("()"));
        assert!(balanced_brackets("([]){}"));
        assert!(balanced_brackets("{[()()]}"));
        assert!(balanced_brackets("a(b[c]d)e"));
    }

    #[test]
    fn test_unbalanced() {
        assert!(!balanced_brackets("("));
        assert!(!balanced_brackets(")"));
        assert!(!balanced_brackets("([)]"));
        assert!(!balanced_brackets("(()"));
        assert!(!balanced_brackets("]["));
    }
}
