pub mod heapsort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quickselect;
pub mod quicksort;

pub use heapsort::heapsort;
pub use insertion_sort::insertion_sort;
pub use merge_sort::merge_sort;
pub use quickselect::quickselect;
pub use quicksort::quicksort;
