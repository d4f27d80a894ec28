use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use log::error;
use parking_lot::{Condvar, Mutex};
use smallvec::SmallVec;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::shard_lock_manager::ShardLockManager;

impl ShardLockManager {
    pub fn new(capacity: usize) -> ShardLockManager {
        ShardLockManager {
            locked: Mutex::new(SmallVec::new()),
            released: Condvar::new(),
            capacity: capacity.max(1),
            shutdown: AtomicBool::new(false),
            stalls: AtomicU64::new(0),
            violations: AtomicU64::new(0),
        }
    }

    /// Blocks until no other caller holds `shard`, then marks it held.
    ///
    /// Fails with `ShuttingDown` when shutdown is signalled while waiting, and
    /// with `LockCapacityExceeded` when the locked list is already full.
    pub(crate) fn lock(&self, shard: usize) -> Result<(), StoreError> {
        let mut locked = self.locked.lock();
        while locked.contains(&shard) {
            if self.shutdown.load(Ordering::Acquire) {
                return Err(StoreError::ShuttingDown);
            }
            self.stalls.fetch_add(1, Ordering::Relaxed);
            self.released.wait(&mut locked);
        }

        if locked.len() >= self.capacity {
            drop(locked);
            self.violations.fetch_add(1, Ordering::Relaxed);
            let message = format!("[LOCK] Locked list full ({} slots), refusing shard {shard}", self.capacity);
            error!("{message}");
            sentry::capture_message(&message, sentry::Level::Error);
            return Err(StoreError::LockCapacityExceeded { shard, capacity: self.capacity });
        }

        locked.push(shard);
        Ok(())
    }

    /// Clears the mark on `shard` and wakes every waiter. Only `ShardGuard::drop`
    /// releases table shards.
    pub(crate) fn unlock(&self, shard: usize) -> Result<(), StoreError> {
        let mut locked = self.locked.lock();
        match locked.iter().position(|held| *held == shard) {
            Some(position) => {
                locked.swap_remove(position);
                drop(locked);
                self.released.notify_all();
                Ok(())
            }
            None => {
                drop(locked);
                self.violations.fetch_add(1, Ordering::Relaxed);
                let message = format!("[LOCK] Unlock of shard {shard} which is not held");
                error!("{message}");
                sentry::capture_message(&message, sentry::Level::Error);
                Err(StoreError::LockNotHeld(shard))
            }
        }
    }

    pub fn is_locked(&self, shard: usize) -> bool {
        self.locked.lock().contains(&shard)
    }

    pub fn held(&self) -> usize {
        self.locked.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stalls(&self) -> u64 {
        self.stalls.load(Ordering::Relaxed)
    }

    pub fn violations(&self) -> u64 {
        self.violations.load(Ordering::Relaxed)
    }

    /// Wakes every waiter; those still blocked on a held shard give up with
    /// `ShuttingDown`. Holders keep their shard until they unlock it.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
        let _guard = self.locked.lock();
        self.released.notify_all();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}
