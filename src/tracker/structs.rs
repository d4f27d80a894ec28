//! Data structures for the swarm store.
//!
//! Identifiers and peer records first, then the containers built from them,
//! then the facade and the background pieces.

/// Main tracker instance struct.
///
/// Holds configuration, the swarm table, the generation clock, statistics
/// and the background work queue.
pub mod torrent_tracker;

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a sort key and for serialization.
pub mod info_hash;

/// Deserialization visitor for InfoHash.
pub mod info_hash_visitor;

/// IPv4 address and port of a peer, its identity within a swarm.
pub mod peer_key;

/// Peer state bits (seeding, completed, stopped).
pub mod peer_flags;

/// A peer key with its flags, as stored in a generation bucket.
pub mod peer_record;

/// Growable array kept sorted and duplicate-free by key.
pub mod sorted_vector;

/// Bounded list of held shard indices.
pub mod shard_lock_manager;

/// Global generation counter derived from wall-clock time.
pub mod generation_clock;

/// Generational ring of peer buckets owned by one swarm.
pub mod peer_pool;

/// An info hash with its peer pool.
pub mod swarm;

/// Seed, peer and download counts of one swarm.
pub mod swarm_metadata;

/// Sharded storage for swarms.
pub mod swarm_table;

/// Exclusive access to one shard, released on drop.
pub mod shard_guard;

/// Counts and peers returned by an announce.
pub mod announce_reply;

/// Info hash paired with its counts.
pub mod swarm_entry;

/// Whole-table sums.
pub mod swarm_totals;

/// Cleanup operation statistics.
///
/// Tracks the number of swarms, seeds, and peers removed during
/// a Reaper sweep.
pub mod cleanup_stats;

/// Serializable result of a Reaper sweep.
pub mod cleanup_summary;

/// Background thread driving periodic sweeps.
pub mod reaper;
