use crate::tracker::errors::StoreError;
use crate::tracker::structs::sorted_vector::SortedVector;
use crate::tracker::traits::sort_key::SortKey;

/// Capacity is multiplied by this when an insert runs out of room.
pub const VECTOR_GROW_RATIO: usize = 8;
/// Smallest backing allocation.
pub const VECTOR_MIN_MEMBERS: usize = 4;
/// Shrink once `len * VECTOR_SHRINK_THRESHOLD < capacity`.
pub const VECTOR_SHRINK_THRESHOLD: usize = 6;
/// Capacity is divided by this when shrinking.
pub const VECTOR_SHRINK_RATIO: usize = 4;

#[cfg(test)]
thread_local! {
    /// Makes the n-th following insert on this thread fail with `OutOfMemory`
    /// before it touches the vector. 0 disables it.
    pub(crate) static FAIL_INSERT_AT: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[cfg(test)]
fn injected_allocation_failure() -> bool {
    FAIL_INSERT_AT.with(|countdown| match countdown.get() {
        0 => false,
        1 => {
            countdown.set(0);
            true
        }
        n => {
            countdown.set(n - 1);
            false
        }
    })
}

impl<T> Default for SortedVector<T> {
    fn default() -> Self {
        SortedVector { data: Vec::new() }
    }
}

impl<T: SortKey> SortedVector<T> {
    pub const fn new() -> SortedVector<T> {
        SortedVector { data: Vec::new() }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the index of `key` and whether it is an exact match. Without a
    /// match the index is where `key` would have to be inserted.
    #[inline]
    pub fn binary_search(&self, key: &T::Key) -> (usize, bool) {
        match self.data.binary_search_by(|element| element.sort_key().cmp(key)) {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }

    pub fn find(&self, key: &T::Key) -> Option<&T> {
        match self.binary_search(key) {
            (index, true) => Some(&self.data[index]),
            _ => None,
        }
    }

    /// Mutable access to a stored element. The caller must not change its sort key.
    pub fn find_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        match self.binary_search(key) {
            (index, true) => Some(&mut self.data[index]),
            _ => None,
        }
    }

    /// Returns the element stored under `key`, inserting `make()` at the sorted
    /// position when there is none. The flag is `true` for an exact match.
    ///
    /// Growth happens before anything is shifted, so an allocation failure
    /// leaves the vector exactly as it was.
    pub fn find_or_insert_with<F>(&mut self, key: &T::Key, make: F) -> Result<(&mut T, bool), StoreError>
    where
        F: FnOnce() -> T
    {
        let (index, exact) = self.binary_search(key);
        if exact {
            return Ok((&mut self.data[index], true));
        }

        self.grow_for_insert()?;
        let element = make();
        debug_assert!(element.sort_key() == key, "inserted element does not carry the searched key");
        self.data.insert(index, element);
        Ok((&mut self.data[index], false))
    }

    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        match self.binary_search(key) {
            (index, true) => Some(self.remove_at(index)),
            _ => None,
        }
    }

    /// Removes the element at `index`, shifting the tail left, then applies the
    /// shrink policy.
    pub fn remove_at(&mut self, index: usize) -> T {
        let element = self.data.remove(index);
        self.shrink_after_remove();
        element
    }

    /// Keeps the elements for which `keep` returns `true`, then applies the
    /// shrink policy once. Order is preserved, so the vector stays sorted.
    pub fn retain_mut<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool
    {
        let before = self.data.len();
        self.data.retain_mut(keep);
        let removed = before - self.data.len();
        if removed > 0 {
            self.shrink_after_remove();
        }
        removed
    }

    /// Drops every element and releases the backing array.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    fn grow_for_insert(&mut self) -> Result<(), StoreError> {
        #[cfg(test)]
        if injected_allocation_failure() {
            return Err(StoreError::OutOfMemory);
        }
        let capacity = self.data.capacity();
        if self.data.len() + 1 < capacity {
            return Ok(());
        }
        let target = capacity.saturating_mul(VECTOR_GROW_RATIO).max(VECTOR_MIN_MEMBERS);
        self.data.try_reserve_exact(target - self.data.len())?;
        Ok(())
    }

    fn shrink_after_remove(&mut self) {
        if self.data.is_empty() {
            self.data = Vec::new();
            return;
        }
        let capacity = self.data.capacity();
        if capacity > VECTOR_MIN_MEMBERS && self.data.len() * VECTOR_SHRINK_THRESHOLD < capacity {
            self.data.shrink_to((capacity / VECTOR_SHRINK_RATIO).max(VECTOR_MIN_MEMBERS));
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
