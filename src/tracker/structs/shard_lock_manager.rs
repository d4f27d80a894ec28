//! Exclusive per-shard locking without one mutex per shard.

use std::sync::atomic::{AtomicBool, AtomicU64};
use parking_lot::{Condvar, Mutex};
use smallvec::SmallVec;

/// Inline slots of the locked list before it spills to the heap.
pub const LOCK_LIST_INLINE: usize = 32;

/// Grants exclusive access to one shard index at a time.
///
/// A single mutex guards a short list of the shard indices that are currently
/// held. `lock` scans the list and waits on a shared condition variable while
/// its index is present; `unlock` removes the index and wakes every waiter to
/// re-check. Memory stays constant regardless of the shard count, the price is
/// an O(held locks) scan, which is a handful of entries in practice.
///
/// The list is bounded by `capacity`, the most threads that can ever hold a
/// shard at the same time. Overflowing it or unlocking an index that is not
/// held is reported and refused; the list itself is never corrupted.
///
/// Outside this crate the manager is read-only diagnostics: a shard of a
/// `SwarmTable` can only be released by dropping its `ShardGuard`.
///
/// ```rust,compile_fail
/// use std::sync::Arc;
/// use torrust_swarm::config::structs::configuration::Configuration;
/// use torrust_swarm::tracker::structs::torrent_tracker::TorrentTracker;
///
/// let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
/// let _guard = tracker.swarms.lock_shard(0).unwrap();
/// tracker.swarms.locks().unlock(0).unwrap();
/// ```
#[derive(Debug)]
pub struct ShardLockManager {
    pub(crate) locked: Mutex<SmallVec<[usize; LOCK_LIST_INLINE]>>,
    pub(crate) released: Condvar,
    pub(crate) capacity: usize,
    pub(crate) shutdown: AtomicBool,
    /// Times a caller had to wait for a held shard. Diagnostic only.
    pub(crate) stalls: AtomicU64,
    pub(crate) violations: AtomicU64,
}
