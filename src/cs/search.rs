pub mod binary_search;
pub mod shifted_binary_search;

pub use binary_search::binary_search;
pub use shifted_binary_search::shifted_binary_search;
