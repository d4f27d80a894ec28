/// The fixed-width prefix an element is ordered and deduplicated by inside a
/// `SortedVector`. Anything past the key (flags, pools) is payload.
pub trait SortKey {
    type Key: Ord;

    fn sort_key(&self) -> &Self::Key;
}
