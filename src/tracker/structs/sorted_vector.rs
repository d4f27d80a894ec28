//! Growable, sorted, duplicate-free array.

/// Dense array kept in ascending order of each element's `SortKey`.
///
/// Swarms per shard and peers per generation bucket are small and read far
/// more often than written, so a sorted array with binary search beats a map
/// on memory density and locality. Capacity is managed explicitly with the
/// growth and shrink ratios in `impls::sorted_vector`.
#[derive(Debug, Clone)]
pub struct SortedVector<T> {
    pub(crate) data: Vec<T>,
}
