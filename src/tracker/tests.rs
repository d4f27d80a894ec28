#[cfg(test)]
mod tracker_tests {
    mod sorted_vector_tests {
        use std::net::Ipv4Addr;
        use proptest::prelude::*;
        use crate::tracker::errors::StoreError;
        use crate::tracker::impls::sorted_vector::FAIL_INSERT_AT;
        use crate::tracker::structs::peer_flags::PeerFlags;
        use crate::tracker::structs::peer_key::PeerKey;
        use crate::tracker::structs::peer_record::PeerRecord;
        use crate::tracker::structs::sorted_vector::SortedVector;

        fn key(n: u16) -> PeerKey {
            PeerKey::new(Ipv4Addr::new(10, 0, (n >> 8) as u8, n as u8), 6881)
        }

        fn insert(vector: &mut SortedVector<PeerRecord>, n: u16) -> bool {
            let key = key(n);
            let (_, exact) = vector.find_or_insert_with(&key, || PeerRecord::new(key, PeerFlags::NONE)).unwrap();
            exact
        }

        #[test]
        fn test_binary_search_insertion_point() {
            let mut vector = SortedVector::new();
            for n in [10u16, 30, 20] {
                insert(&mut vector, n);
            }
            assert_eq!(vector.binary_search(&key(20)), (1, true));
            assert_eq!(vector.binary_search(&key(5)), (0, false));
            assert_eq!(vector.binary_search(&key(25)), (2, false));
            assert_eq!(vector.binary_search(&key(99)), (3, false));
        }

        #[test]
        fn test_find_or_insert_reports_exact_match() {
            let mut vector = SortedVector::new();
            assert!(!insert(&mut vector, 7));
            assert!(insert(&mut vector, 7));
            assert_eq!(vector.len(), 1);
        }

        #[test]
        fn test_failed_insert_leaves_vector_unchanged() {
            let mut vector = SortedVector::new();
            for n in [10u16, 20, 30] {
                insert(&mut vector, n);
            }
            let before: Vec<PeerRecord> = vector.as_slice().to_vec();
            let capacity = vector.capacity();

            FAIL_INSERT_AT.with(|countdown| countdown.set(1));
            let missing = key(15);
            let result = vector.find_or_insert_with(&missing, || PeerRecord::new(missing, PeerFlags::SEEDING));
            assert!(matches!(result, Err(StoreError::OutOfMemory)));
            assert_eq!(vector.as_slice(), before.as_slice());
            assert_eq!(vector.capacity(), capacity);
            assert!(vector.find(&missing).is_none());
            assert_eq!(FAIL_INSERT_AT.with(|countdown| countdown.get()), 0);

            // Exact matches never grow, so an armed failure does not fire.
            FAIL_INSERT_AT.with(|countdown| countdown.set(1));
            assert!(insert(&mut vector, 20));
            FAIL_INSERT_AT.with(|countdown| countdown.set(0));
            assert!(!insert(&mut vector, 15));
            assert_eq!(vector.len(), 4);
        }

        #[test]
        fn test_growth_and_release() {
            let mut vector = SortedVector::new();
            assert_eq!(vector.capacity(), 0);
            insert(&mut vector, 1);
            assert!(vector.capacity() >= 4);
            for n in 2..=20 {
                insert(&mut vector, n);
            }
            let grown = vector.capacity();
            assert!(grown >= 20);
            for n in 1..=16 {
                assert!(vector.remove(&key(n)).is_some());
            }
            assert_eq!(vector.len(), 4);
            assert!(vector.capacity() < grown);
            for n in 17..=20 {
                vector.remove(&key(n));
            }
            assert!(vector.is_empty());
            assert_eq!(vector.capacity(), 0);
        }

        #[test]
        fn test_remove_missing_is_none() {
            let mut vector: SortedVector<PeerRecord> = SortedVector::new();
            assert!(vector.remove(&key(1)).is_none());
            insert(&mut vector, 1);
            assert!(vector.remove(&key(2)).is_none());
            assert_eq!(vector.len(), 1);
        }

        #[test]
        fn test_retain_mut_keeps_order() {
            let mut vector = SortedVector::new();
            for n in (0..50u16).rev() {
                insert(&mut vector, n);
            }
            let removed = vector.retain_mut(|record| record.key.0[3] % 2 == 0);
            assert_eq!(removed, 25);
            let keys: Vec<PeerKey> = vector.iter().map(|record| record.key).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }

        proptest! {
            #[test]
            fn prop_sorted_and_unique(ops in prop::collection::vec((any::<bool>(), 0u16..64), 0..200)) {
                let mut vector = SortedVector::new();
                let mut model = std::collections::BTreeSet::new();
                for (is_insert, n) in ops {
                    if is_insert {
                        insert(&mut vector, n);
                        model.insert(key(n));
                    } else {
                        vector.remove(&key(n));
                        model.remove(&key(n));
                    }
                    let keys: Vec<PeerKey> = vector.iter().map(|record| record.key).collect();
                    prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                    prop_assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
                }
            }
        }
    }

    mod shard_lock_manager_tests {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;
        use crate::tracker::errors::StoreError;
        use crate::tracker::structs::shard_lock_manager::ShardLockManager;

        #[test]
        fn test_lock_unlock() {
            let locks = ShardLockManager::new(4);
            locks.lock(3).unwrap();
            assert!(locks.is_locked(3));
            assert_eq!(locks.held(), 1);
            locks.unlock(3).unwrap();
            assert!(!locks.is_locked(3));
            assert_eq!(locks.held(), 0);
        }

        #[test]
        fn test_unlock_not_held_is_reported() {
            let locks = ShardLockManager::new(4);
            locks.lock(1).unwrap();
            assert!(matches!(locks.unlock(2), Err(StoreError::LockNotHeld(2))));
            assert_eq!(locks.violations(), 1);
            assert!(locks.is_locked(1));
            locks.unlock(1).unwrap();
        }

        #[test]
        fn test_capacity_exceeded() {
            let locks = ShardLockManager::new(2);
            locks.lock(1).unwrap();
            locks.lock(2).unwrap();
            assert!(matches!(
                locks.lock(3),
                Err(StoreError::LockCapacityExceeded { shard: 3, capacity: 2 })
            ));
            assert_eq!(locks.held(), 2);
            assert_eq!(locks.violations(), 1);
        }

        #[test]
        fn test_waiter_proceeds_after_unlock() {
            let locks = Arc::new(ShardLockManager::new(4));
            locks.lock(5).unwrap();
            let (tx, rx) = mpsc::channel();
            let locks_clone = locks.clone();
            let waiter = thread::spawn(move || {
                locks_clone.lock(5).unwrap();
                tx.send(()).unwrap();
                locks_clone.unlock(5).unwrap();
            });
            assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
            locks.unlock(5).unwrap();
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
            waiter.join().unwrap();
            assert!(locks.stalls() >= 1);
        }

        #[test]
        fn test_shutdown_wakes_waiters() {
            let locks = Arc::new(ShardLockManager::new(4));
            locks.lock(9).unwrap();
            let locks_clone = locks.clone();
            let waiter = thread::spawn(move || locks_clone.lock(9));
            thread::sleep(Duration::from_millis(50));
            locks.shutdown();
            assert!(matches!(waiter.join().unwrap(), Err(StoreError::ShuttingDown)));
            assert!(locks.is_shutdown());
        }

        #[test]
        fn test_mutual_exclusion_under_contention() {
            let locks = Arc::new(ShardLockManager::new(16));
            let holders: Arc<Vec<AtomicUsize>> = Arc::new((0..4).map(|_| AtomicUsize::new(0)).collect());
            let overlap = Arc::new(AtomicBool::new(false));
            let mut handles = Vec::new();
            for t in 0..8usize {
                let locks = locks.clone();
                let holders = holders.clone();
                let overlap = overlap.clone();
                handles.push(thread::spawn(move || {
                    for i in 0..500usize {
                        let shard = (t + i) % 4;
                        locks.lock(shard).unwrap();
                        if holders[shard].fetch_add(1, Ordering::SeqCst) != 0 {
                            overlap.store(true, Ordering::SeqCst);
                        }
                        holders[shard].fetch_sub(1, Ordering::SeqCst);
                        locks.unlock(shard).unwrap();
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }
            assert!(!overlap.load(Ordering::SeqCst));
            assert_eq!(locks.held(), 0);
        }
    }

    mod swarm_table_tests {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::thread;
        use std::time::Duration;
        use proptest::prelude::*;
        use crate::tracker::errors::StoreError;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::swarm::Swarm;
        use crate::tracker::structs::swarm_table::SwarmTable;

        fn hash_with_prefix(prefix: [u8; 4]) -> InfoHash {
            let mut bytes = [0xEEu8; 20];
            bytes[..4].copy_from_slice(&prefix);
            InfoHash(bytes)
        }

        #[test]
        fn test_shard_count_and_clamping() {
            assert_eq!(SwarmTable::new(10, 8).shard_count(), 1024);
            assert_eq!(SwarmTable::new(0, 8).shard_bits(), 1);
            assert_eq!(SwarmTable::new(40, 8).shard_bits(), 16);
        }

        #[test]
        fn test_shard_of_uses_leading_bits() {
            let table = SwarmTable::new(10, 8);
            assert_eq!(table.shard_of(&hash_with_prefix([0, 0, 0, 0])), 0);
            assert_eq!(table.shard_of(&hash_with_prefix([0xFF, 0xFF, 0, 0])), 1023);
            assert_eq!(table.shard_of(&hash_with_prefix([0x00, 0x40, 0, 0])), 1);
            assert_eq!(table.shard_of(&hash_with_prefix([0x00, 0x3F, 0xFF, 0xFF])), 0);
        }

        #[test]
        fn test_guard_releases_on_drop() {
            let table = SwarmTable::new(4, 4);
            let hash = hash_with_prefix([0x12, 0, 0, 0]);
            {
                let mut shard = table.lock_for(&hash).unwrap();
                assert_eq!(shard.index(), 1);
                shard.find_or_insert_with(&hash, || Swarm::new(hash, 1)).unwrap();
                assert!(table.locks().is_locked(1));
            }
            assert!(!table.locks().is_locked(1));
            let shard = table.lock_shard(1).unwrap();
            assert!(shard.find(&hash).is_some());
        }

        #[test]
        fn test_lock_shard_out_of_range() {
            let table = SwarmTable::new(4, 4);
            assert!(matches!(
                table.lock_shard(16),
                Err(StoreError::ShardOutOfRange { shard: 16, count: 16 })
            ));
            assert_eq!(table.locks().held(), 0);
            assert!(table.lock_shard(15).is_ok());
        }

        #[test]
        fn test_held_shard_only_released_by_its_guard() {
            let table = Arc::new(SwarmTable::new(4, 4));
            let acquired = Arc::new(AtomicBool::new(false));
            let guard = table.lock_shard(0).unwrap();

            let table_clone = table.clone();
            let acquired_clone = acquired.clone();
            let contender = thread::spawn(move || {
                let shard = table_clone.lock_shard(0).unwrap();
                acquired_clone.store(true, Ordering::SeqCst);
                shard.len()
            });

            thread::sleep(Duration::from_millis(50));
            assert!(!acquired.load(Ordering::SeqCst));
            assert!(table.locks().is_locked(0));

            drop(guard);
            assert_eq!(contender.join().unwrap(), 0);
            assert!(acquired.load(Ordering::SeqCst));
            assert_eq!(table.locks().held(), 0);
        }

        proptest! {
            #[test]
            fn prop_sharding_is_deterministic(a in any::<[u8; 20]>(), b in any::<[u8; 20]>(), bits in 1u32..=16) {
                let table = SwarmTable::new(bits, 4);
                let (ha, hb) = (InfoHash(a), InfoHash(b));
                let same_bits = (ha.prefix() >> (32 - bits)) == (hb.prefix() >> (32 - bits));
                prop_assert_eq!(table.shard_of(&ha) == table.shard_of(&hb), same_bits);
                prop_assert_eq!(table.shard_of(&ha), table.shard_of(&InfoHash(a)));
                prop_assert!(table.shard_of(&ha) < table.shard_count());
            }
        }
    }

    mod peer_pool_tests {
        use std::collections::HashSet;
        use std::net::Ipv4Addr;
        use crate::tracker::enums::reap_outcome::ReapOutcome;
        use crate::tracker::enums::upsert_outcome::UpsertOutcome;
        use crate::tracker::errors::StoreError;
        use crate::tracker::impls::sorted_vector::FAIL_INSERT_AT;
        use crate::tracker::structs::peer_flags::PeerFlags;
        use crate::tracker::structs::peer_key::PeerKey;
        use crate::tracker::structs::peer_pool::{PeerPool, POOLS_COUNT};
        use crate::tracker::structs::peer_record::PeerRecord;

        const IDLE: u64 = 288;

        fn peer(n: u8) -> PeerKey {
            PeerKey::new(Ipv4Addr::new(10, 0, 0, n), 6881)
        }

        fn upsert(pool: &mut PeerPool, n: u8, flags: PeerFlags, generation: u64) -> UpsertOutcome {
            pool.upsert(PeerRecord::new(peer(n), flags), generation).unwrap()
        }

        fn assert_aggregates(pool: &PeerPool) {
            let peers: usize = (0..POOLS_COUNT).map(|bucket| pool.bucket_len(bucket)).sum();
            let seeds = pool.iter().filter(|record| record.flags.is_seeding()).count();
            assert_eq!(pool.peer_count(), peers);
            assert_eq!(pool.seed_count(), seeds);
        }

        #[test]
        fn test_insert_and_refresh() {
            let mut pool = PeerPool::new(100);
            assert_eq!(upsert(&mut pool, 1, PeerFlags::NONE, 100), UpsertOutcome::Inserted);
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 0));
            assert_eq!(upsert(&mut pool, 1, PeerFlags::SEEDING, 100), UpsertOutcome::Refreshed);
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 1));
            assert_eq!(upsert(&mut pool, 1, PeerFlags::NONE, 100), UpsertOutcome::Refreshed);
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 0));
            assert_aggregates(&pool);
        }

        #[test]
        fn test_completed_counts_once() {
            let mut pool = PeerPool::new(1);
            upsert(&mut pool, 1, PeerFlags::COMPLETED, 1);
            upsert(&mut pool, 1, PeerFlags::COMPLETED | PeerFlags::SEEDING, 1);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 1);
            assert_eq!(pool.download_count(), 1);
            assert!(pool.iter().all(|record| record.flags.is_completed()));
            upsert(&mut pool, 2, PeerFlags::NONE, 1);
            upsert(&mut pool, 2, PeerFlags::COMPLETED, 1);
            assert_eq!(pool.download_count(), 2);
        }

        #[test]
        fn test_reannounce_from_older_bucket_promotes() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 100);
            upsert(&mut pool, 2, PeerFlags::NONE, 100);
            assert!(matches!(pool.reap(103, IDLE), ReapOutcome::Aged { peers: 0, seeds: 0 }));
            assert_eq!(pool.locate(&peer(1)), Some(3));
            assert_eq!(upsert(&mut pool, 1, PeerFlags::SEEDING, 103), UpsertOutcome::Promoted);
            assert_eq!(pool.locate(&peer(1)), Some(0));
            assert_eq!(pool.locate(&peer(2)), Some(3));
            assert_eq!((pool.peer_count(), pool.seed_count()), (2, 1));
            assert_eq!(pool.iter().filter(|record| record.key == peer(1)).count(), 1);
            assert_aggregates(&pool);
        }

        #[test]
        fn test_failed_promotion_keeps_older_record() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 100);
            pool.reap(101, IDLE);
            assert_eq!(pool.locate(&peer(1)), Some(1));

            FAIL_INSERT_AT.with(|countdown| countdown.set(1));
            let result = pool.upsert(PeerRecord::new(peer(1), PeerFlags::NONE), 101);
            assert!(matches!(result, Err(StoreError::OutOfMemory)));
            assert_eq!(pool.locate(&peer(1)), Some(1));
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 1));
            assert!(pool.iter().all(|record| record.flags.is_seeding()));
            assert_aggregates(&pool);

            assert_eq!(upsert(&mut pool, 1, PeerFlags::NONE, 101), UpsertOutcome::Promoted);
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 0));
            assert_aggregates(&pool);
        }

        #[test]
        fn test_remove_from_any_bucket() {
            let mut pool = PeerPool::new(10);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 10);
            pool.reap(12, IDLE);
            upsert(&mut pool, 2, PeerFlags::NONE, 12);
            assert!(pool.remove(&peer(1)).is_some());
            assert!(pool.remove(&peer(1)).is_none());
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 0));
            assert_aggregates(&pool);
        }

        #[test]
        fn test_expiry_bound_with_every_generation_reaped() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::NONE, 100);
            for generation in 101..100 + POOLS_COUNT as u64 {
                pool.reap(generation, IDLE);
                assert_eq!(pool.peer_count(), 1, "peer missing at generation {generation}");
            }
            assert!(matches!(pool.reap(100 + POOLS_COUNT as u64, IDLE), ReapOutcome::Aged { peers: 1, seeds: 0 }));
            assert_eq!(pool.peer_count(), 0);
        }

        #[test]
        fn test_expiry_bound_with_single_late_reap() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 100);
            pool.reap(108, IDLE);
            assert_eq!((pool.peer_count(), pool.seed_count()), (1, 1));
            assert_eq!(pool.locate(&peer(1)), Some(8));

            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 100);
            assert!(matches!(pool.reap(109, IDLE), ReapOutcome::Aged { peers: 1, seeds: 1 }));
            assert_eq!((pool.peer_count(), pool.seed_count()), (0, 0));
        }

        #[test]
        fn test_reap_is_idempotent() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::NONE, 100);
            pool.reap(104, IDLE);
            assert_eq!(pool.base_generation(), 104);
            assert_eq!(pool.reap(104, IDLE), ReapOutcome::Current);
            assert_eq!(pool.locate(&peer(1)), Some(4));
        }

        #[test]
        fn test_empty_pool_base_lags_ring() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::NONE, 100);
            pool.reap(115, IDLE);
            assert_eq!(pool.peer_count(), 0);
            assert_eq!(pool.base_generation(), 115 - POOLS_COUNT as u64);
        }

        #[test]
        fn test_empty_pool_without_downloads_is_exhausted() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::NONE, 100);
            pool.reap(109, IDLE);
            assert_eq!(pool.reap(120, IDLE), ReapOutcome::Exhausted);
        }

        #[test]
        fn test_empty_pool_with_downloads_is_retained_until_idle() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::COMPLETED, 100);
            pool.reap(109, IDLE);
            assert_eq!(pool.peer_count(), 0);
            assert_eq!(pool.reap(150, IDLE), ReapOutcome::Retained);
            assert_eq!(pool.reap(100 + IDLE + 1, IDLE), ReapOutcome::Exhausted);
        }

        #[test]
        fn test_idle_limit_drops_populated_pool() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::SEEDING, 100);
            assert_eq!(pool.reap(100 + IDLE + 1, IDLE), ReapOutcome::Exhausted);
        }

        #[test]
        fn test_insert_rebases_empty_pool() {
            let mut pool = PeerPool::new(100);
            upsert(&mut pool, 1, PeerFlags::NONE, 500);
            assert_eq!(pool.base_generation(), 500);
            assert_eq!(pool.reap(500, IDLE), ReapOutcome::Current);
        }

        #[test]
        fn test_sample_all_when_room() {
            let mut pool = PeerPool::new(1);
            for n in 1..=5 {
                upsert(&mut pool, n, PeerFlags::NONE, 1);
            }
            assert_eq!(pool.sample(5).len(), 5);
            assert_eq!(pool.sample(50).len(), 5);
            assert!(pool.sample(0).is_empty());
            assert!(PeerPool::new(1).sample(10).is_empty());
        }

        #[test]
        fn test_sample_distinct_and_spread() {
            let mut pool = PeerPool::new(1);
            for n in 0..50 {
                upsert(&mut pool, n, PeerFlags::NONE, 1);
            }
            pool.reap(2, IDLE);
            for n in 50..100 {
                upsert(&mut pool, n, PeerFlags::NONE, 2);
            }
            assert_eq!(pool.peer_count(), 100);
            for _ in 0..50 {
                let sample = pool.sample(10);
                assert_eq!(sample.len(), 10);
                let unique: HashSet<PeerKey> = sample.iter().map(|record| record.key).collect();
                assert_eq!(unique.len(), 10);
                assert!(sample.iter().any(|record| record.key.0[3] < 50));
                assert!(sample.iter().any(|record| record.key.0[3] >= 50));
            }
        }
    }

    mod info_hash_tests {
        use std::str::FromStr;
        use crate::tracker::structs::info_hash::InfoHash;

        const HEX: &str = "0123456789abcdef0123456789abcdef01234567";

        #[test]
        fn test_from_str_and_display() {
            let hash = InfoHash::from_str(HEX).unwrap();
            assert_eq!(hash.0[0], 0x01);
            assert_eq!(hash.0[19], 0x67);
            assert_eq!(hash.to_string(), HEX);
            assert_eq!(hash.prefix(), 0x0123_4567);
        }

        #[test]
        fn test_from_str_rejects_bad_input() {
            assert!(InfoHash::from_str("0123").is_err());
            assert!(InfoHash::from_str("zz23456789abcdef0123456789abcdef01234567").is_err());
        }

        #[test]
        fn test_serde_as_hex() {
            let hash = InfoHash::from_str(HEX).unwrap();
            let json = serde_json::to_string(&hash).unwrap();
            assert_eq!(json, format!("\"{HEX}\""));
            let parsed: InfoHash = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, hash);
            assert!(serde_json::from_str::<InfoHash>("\"abcd\"").is_err());
        }

        #[test]
        fn test_try_from_slice() {
            assert!(InfoHash::try_from(&[1u8; 20][..]).is_ok());
            assert!(InfoHash::try_from(&[1u8; 19][..]).is_err());
        }
    }

    mod peer_key_tests {
        use std::net::{Ipv4Addr, SocketAddrV4};
        use crate::tracker::structs::peer_flags::PeerFlags;
        use crate::tracker::structs::peer_key::PeerKey;

        #[test]
        fn test_peer_key_layout() {
            let key = PeerKey::new(Ipv4Addr::new(10, 0, 0, 1), 6881);
            assert_eq!(key.0, [10, 0, 0, 1, 0x1A, 0xE1]);
            assert_eq!(key.port(), 6881);
            assert_eq!(key.to_string(), "10.0.0.1:6881");
            assert_eq!(PeerKey::from(SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 6881)), key);
        }

        #[test]
        fn test_peer_key_order_is_bytewise() {
            let low = PeerKey::new(Ipv4Addr::new(10, 0, 0, 1), 65535);
            let high = PeerKey::new(Ipv4Addr::new(10, 0, 0, 2), 1);
            assert!(low < high);
        }

        #[test]
        fn test_peer_flags() {
            let mut flags = PeerFlags::SEEDING | PeerFlags::COMPLETED;
            assert!(flags.is_seeding());
            assert!(flags.is_completed());
            assert!(!flags.is_stopped());
            flags.remove(PeerFlags::SEEDING);
            assert!(!flags.is_seeding());
            flags |= PeerFlags::STOPPED;
            assert!(flags.is_stopped());
        }
    }

    mod generation_clock_tests {
        use crate::common::common::current_time;
        use crate::tracker::structs::generation_clock::GenerationClock;

        #[test]
        fn test_wall_clock_generation() {
            let clock = GenerationClock::new(300);
            let expected = current_time() / 300;
            assert!(clock.now() == expected || clock.now() + 1 == expected);
        }

        #[test]
        fn test_manual_clock_only_moves_through_set() {
            let clock = GenerationClock::manual(300, 100);
            assert!(clock.is_manual());
            assert_eq!(clock.now(), 100);
            assert_eq!(clock.refresh(), 100);
            assert_eq!(clock.now(), 100);
            clock.set(105);
            assert_eq!(clock.refresh(), 105);
            assert_eq!(clock.now(), 105);
        }

        #[test]
        fn test_refresh_never_goes_back() {
            let clock = GenerationClock::new(300);
            assert!(!clock.is_manual());
            let wall = clock.now();
            clock.set(u64::MAX / 2);
            assert_eq!(clock.refresh(), u64::MAX / 2);
            assert_eq!(clock.now(), u64::MAX / 2);
            clock.set(wall.saturating_sub(10));
            assert!(clock.refresh() >= wall);
        }
    }

    mod torrent_tracker_tests {
        use std::net::Ipv4Addr;
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::errors::StoreError;
        use crate::tracker::impls::sorted_vector::FAIL_INSERT_AT;
        use crate::tracker::structs::generation_clock::GenerationClock;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_flags::PeerFlags;
        use crate::tracker::structs::peer_key::PeerKey;
        use crate::tracker::structs::torrent_tracker::TorrentTracker;

        fn tracker() -> TorrentTracker {
            TorrentTracker::with_clock(Arc::new(Configuration::init()), GenerationClock::manual(300, 100))
        }

        fn peer(n: u8) -> PeerKey {
            PeerKey::new(Ipv4Addr::new(10, 0, 0, n), 6881)
        }

        #[test]
        fn test_failed_first_peer_rolls_back_new_swarm() {
            let tracker = tracker();
            let hash = InfoHash([0x42; 20]);

            // The swarm insert goes through, the first peer insert fails.
            FAIL_INSERT_AT.with(|countdown| countdown.set(2));
            let result = tracker.upsert_peer(hash, peer(1), PeerFlags::SEEDING);
            assert!(matches!(result, Err(StoreError::OutOfMemory)));

            let shard = tracker.swarms.lock_for(&hash).unwrap();
            assert!(shard.find(&hash).is_none());
            assert!(shard.is_empty());
            drop(shard);

            assert_eq!(tracker.swarm_totals().unwrap().torrents, 0);
            let stats = tracker.get_stats();
            assert_eq!((stats.swarms, stats.peers, stats.seeds, stats.completed), (0, 0, 0, 0));
            assert_eq!(stats.upsert_failures, 1);

            assert!(tracker.upsert_peer(hash, peer(1), PeerFlags::SEEDING).is_ok());
            assert_eq!(tracker.get_stats().swarms, 1);
        }

        #[test]
        fn test_failed_peer_insert_leaves_existing_swarm_untouched() {
            let tracker = tracker();
            let hash = InfoHash([0x42; 20]);
            let stored = tracker.upsert_peer(hash, peer(1), PeerFlags::SEEDING | PeerFlags::COMPLETED).unwrap();

            FAIL_INSERT_AT.with(|countdown| countdown.set(1));
            let result = tracker.upsert_peer(hash, peer(2), PeerFlags::NONE);
            assert!(matches!(result, Err(StoreError::OutOfMemory)));

            assert_eq!(tracker.scrape_one(hash).unwrap(), stored);
            let peers = tracker.sample_peers(hash, 10).unwrap();
            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].key, peer(1));

            let stats = tracker.get_stats();
            assert_eq!((stats.swarms, stats.peers, stats.seeds, stats.completed), (1, 1, 1, 1));
            assert_eq!(stats.upsert_failures, 1);
        }
    }
}
