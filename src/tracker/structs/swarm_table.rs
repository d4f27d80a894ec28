//! Sharded storage for swarms.

use std::cell::UnsafeCell;
use crate::tracker::structs::shard_lock_manager::ShardLockManager;
use crate::tracker::structs::sorted_vector::SortedVector;
use crate::tracker::structs::swarm::Swarm;

/// One shard's swarms. Only reachable through a `ShardGuard`.
#[derive(Debug, Default)]
pub struct ShardSlot(pub(crate) UnsafeCell<SortedVector<Swarm>>);

/// Table of `2^shard_bits` shards, each a sorted vector of swarms.
///
/// A swarm lives in the shard selected by the leading `shard_bits` bits of its
/// info hash. Shards carry no mutex of their own: exclusive access is granted
/// by the `ShardLockManager` and handed out as a `ShardGuard`, which is the
/// only way to read or write a shard.
///
/// No code path holds two shards at once. Whole-table walks lock, visit and
/// release one shard before touching the next.
#[derive(Debug)]
pub struct SwarmTable {
    pub(crate) shards: Box<[ShardSlot]>,
    pub(crate) locks: ShardLockManager,
    pub(crate) shard_bits: u32,
}

// SAFETY: a slot's contents are only dereferenced through a `ShardGuard`, and
// the lock manager hands out at most one guard per shard index at a time.
unsafe impl Sync for SwarmTable {}
