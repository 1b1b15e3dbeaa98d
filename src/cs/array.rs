pub mod detect_primes;
pub mod largest_range;
pub mod merge_intervals;
pub mod non_constructible_change;
pub mod sorted_squared_array;
pub mod tournament_winner;
pub mod two_number_sum;
pub mod validate_subsequence;

pub use detect_primes::detect_primes;
pub use largest_range::largest_range;
pub use merge_intervals::merge_intervals;
pub use non_constructible_change::non_constructible_change;
pub use sorted_squared_array::sorted_squared_array;
pub use tournament_winner::tournament_winner;
pub use two_number_sum::two_number_sum;
pub use validate_subsequence::is_valid_subsequence;
