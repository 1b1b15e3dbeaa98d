pub mod breadth_first_search;
pub mod depth_first_search;
pub mod number_of_islands;
pub mod topological_sort;
pub mod two_colorable;

pub use breadth_first_search::breadth_first_search;
pub use depth_first_search::depth_first_search;
pub use number_of_islands::number_of_islands;
pub use topological_sort::topological_sort;
pub use two_colorable::two_colorable;
