pub mod cs;
pub mod error;

pub use cs::{array, dynamic, graph, list, search, sort, string, tree};
pub use error::{Error, Result};
