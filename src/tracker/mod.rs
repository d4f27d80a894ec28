//! The concurrent swarm store.
//!
//! This module records, for every swarm (info hash), the peers currently
//! taking part, and answers announce and scrape queries against them.
//!
//! # Architecture
//!
//! - Swarms are spread over `2^shard_bits` shards by the leading bits of the
//!   info hash. Each shard is a `SortedVector<Swarm>`.
//! - Shards carry no mutex. A single `ShardLockManager` keeps a short list of
//!   the shard indices currently held and hands out `ShardGuard`s; memory is
//!   independent of the shard count.
//! - Every swarm owns a `PeerPool`: a ring of nine generation buckets. New and
//!   refreshed peers land in bucket 0; the Reaper rotates the ring as the
//!   generation clock advances, so peers expire without timers.
//! - Whole-table work (full scrape, statistics, reaping) never holds more than
//!   one shard lock at a time.
//!
//! # Main Components
//!
//! - `TorrentTracker` - The store facade
//! - `SwarmTable` / `ShardGuard` - Sharded swarm storage
//! - `ShardLockManager` - Bounded lock list with a shared condition variable
//! - `PeerPool` - Generational ring of peer records
//! - `Reaper` - Timer thread advancing every ring
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_swarm::config::structs::configuration::Configuration;
//! use torrust_swarm::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let reply = tracker.announce(info_hash, peer_key, PeerFlags::SEEDING, 50)?;
//! let counts = tracker.scrape_one(info_hash)?;
//! ```

/// Enumerations for store operations.
pub mod enums;

/// Store error type.
pub mod errors;

/// Implementation blocks for tracker structs.
///
/// Contains the method implementations for the store's data structures,
/// including the `TorrentTracker` facade split by concern.
pub mod impls;

/// Data structures for the swarm store.
pub mod structs;

/// Traits shared by the store's containers.
pub mod traits;

/// Unit tests for tracker functionality.
pub mod tests;
