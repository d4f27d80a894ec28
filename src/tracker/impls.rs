//! Implementation blocks for tracker data structures.
//!
//! This module contains all the `impl` blocks that provide methods for the
//! tracker's data structures. Implementations are organized by the struct
//! they extend.

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// Visitor used to deserialize an InfoHash from a hex string.
pub mod info_hash_visitor;

/// PeerKey implementation: address accessors, Display, Serialize.
pub mod peer_key;

/// PeerFlags implementation: bit queries and operators.
pub mod peer_flags;

/// PeerRecord implementation: construction and sort key.
pub mod peer_record;

/// SortedVector implementation: search, insert, remove, growth policy.
pub mod sorted_vector;

/// ShardLockManager implementation: lock, unlock, shutdown.
pub mod shard_lock_manager;

/// GenerationClock implementation.
pub mod generation_clock;

/// PeerPool implementation: upsert, remove, reap, sample.
pub mod peer_pool;

/// Swarm implementation.
pub mod swarm;

/// SwarmMetadata implementation.
pub mod swarm_metadata;

/// SwarmTable implementation: shard selection and locking.
pub mod swarm_table;

/// ShardGuard implementation: deref into the shard, unlock on drop.
pub mod shard_guard;

/// TorrentTracker core implementation: initialization and task dispatch.
pub mod torrent_tracker;

/// TorrentTracker peer methods (upsert, remove, sample, announce).
pub mod torrent_tracker_peers;

/// TorrentTracker swarm methods (scrape, removal, whole-table iteration).
pub mod torrent_tracker_swarms;

/// TorrentTracker background scan methods and result encoding.
pub mod torrent_tracker_scans;

/// TorrentTracker Reaper sweep.
pub mod torrent_tracker_reap;

/// CleanupStats implementation: atomic counter operations.
pub mod cleanup_stats;

/// Reaper implementation: thread start, stop and loop.
pub mod reaper;
