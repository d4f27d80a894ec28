use std::ops::{Deref, DerefMut};
use crate::tracker::structs::shard_guard::ShardGuard;
use crate::tracker::structs::sorted_vector::SortedVector;
use crate::tracker::structs::swarm::Swarm;

impl ShardGuard<'_> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for ShardGuard<'_> {
    type Target = SortedVector<Swarm>;

    fn deref(&self) -> &SortedVector<Swarm> {
        // SAFETY: this guard is the only holder of the shard lock for `index`.
        unsafe { &*self.table.shards[self.index].0.get() }
    }
}

impl DerefMut for ShardGuard<'_> {
    fn deref_mut(&mut self) -> &mut SortedVector<Swarm> {
        // SAFETY: as above, and `&mut self` keeps this the only live borrow.
        unsafe { &mut *self.table.shards[self.index].0.get() }
    }
}

impl Drop for ShardGuard<'_> {
    fn drop(&mut self) {
        // A failed unlock is already logged and counted by the lock manager.
        let _ = self.table.locks.unlock(self.index);
    }
}
