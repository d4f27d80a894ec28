/// Key extraction for `SortedVector` elements.
pub mod sort_key;
