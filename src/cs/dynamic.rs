pub mod coin_change;
pub mod count_bits;
pub mod edit_distance;
pub mod fibonacci;
pub mod kadane;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod staircase_traversal;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{count_change_ways, min_coins_for_change};
pub use count_bits::count_bits;
pub use edit_distance::{edit_distance, levenshtein_distance};
pub use fibonacci::fibonacci;
pub use kadane::kadane;
pub use knapsack::knapsack_max_value;
pub use longest_common_subsequence::{lcs_length, lcs_sequence};
pub use staircase_traversal::staircase_ways;
