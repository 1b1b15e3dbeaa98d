pub mod balanced_brackets;
pub mod caesar_cipher;
pub mod first_non_repeating_character;
pub mod group_anagrams;
pub mod longest_palindromic_substring;
pub mod reverse_words;
pub mod run_length_encoding;

pub use balanced_brackets::balanced_brackets;
pub use caesar_cipher::caesar_cipher;
pub use first_non_repeating_character::first_non_repeating_character;
pub use group_anagrams::group_anagrams;
pub use longest_palindromic_substring::longest_palindromic_substring;
pub use reverse_words::reverse_words;
pub use run_length_encoding::run_length_encode;
