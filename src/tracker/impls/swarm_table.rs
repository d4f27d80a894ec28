use std::cell::UnsafeCell;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::shard_guard::ShardGuard;
use crate::tracker::structs::shard_lock_manager::ShardLockManager;
use crate::tracker::structs::sorted_vector::SortedVector;
use crate::tracker::structs::swarm_table::{ShardSlot, SwarmTable};

pub const MIN_SHARD_BITS: u32 = 1;
pub const MAX_SHARD_BITS: u32 = 16;

impl SwarmTable {
    pub fn new(shard_bits: u32, lock_slots: usize) -> SwarmTable {
        let shard_bits = shard_bits.clamp(MIN_SHARD_BITS, MAX_SHARD_BITS);
        let shards = (0..1usize << shard_bits)
            .map(|_| ShardSlot(UnsafeCell::new(SortedVector::new())))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        SwarmTable {
            shards,
            locks: ShardLockManager::new(lock_slots),
            shard_bits,
        }
    }

    #[inline(always)]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn shard_bits(&self) -> u32 {
        self.shard_bits
    }

    /// Shard index of `hash`: its leading `shard_bits` bits.
    #[inline(always)]
    pub fn shard_of(&self, hash: &InfoHash) -> usize {
        (hash.prefix() >> (32 - self.shard_bits)) as usize
    }

    /// Blocks until shard `index` is free and returns exclusive access to it.
    pub fn lock_shard(&self, index: usize) -> Result<ShardGuard<'_>, StoreError> {
        if index >= self.shards.len() {
            return Err(StoreError::ShardOutOfRange { shard: index, count: self.shards.len() });
        }
        self.locks.lock(index)?;
        Ok(ShardGuard { table: self, index })
    }

    /// Locks the shard `hash` belongs to.
    #[inline]
    pub fn lock_for(&self, hash: &InfoHash) -> Result<ShardGuard<'_>, StoreError> {
        self.lock_shard(self.shard_of(hash))
    }

    pub fn locks(&self) -> &ShardLockManager {
        &self.locks
    }
}
