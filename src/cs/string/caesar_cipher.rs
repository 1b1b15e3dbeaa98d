/// Rotates every ASCII letter forward by `key` positions, wrapping within
/// its alphabet.
///
/// Case is preserved and non-letter characters pass through unchanged.
///
/// # Examples
///
/// ```
/// use algokit::cs::string::caesar_cipher::caesar_cipher;
///
/// assert_eq!(caesar_cipher("xyz", 2), "zab");
/// assert_eq!(caesar_cipher("Attack at dawn!", 13), "Nggnpx ng qnja!");
/// ```
pub fn caesar_cipher(text: &str, key: u32) -> String {
    let key = (key % 26) as u8;
    text.chars()
        .map(|c| match c {
            'a'..='z' => (b'a' + (c as u8 - b'a' + key) % 26) as char,
            'A'..='Z' => (b'A' + (c as u8 - b'A' + key) % 26) as char,
            _ => c,
        })
        .collect()
}
