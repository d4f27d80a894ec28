//! # Torrust-Swarm
//!
//! The concurrent swarm store at the heart of a BitTorrent tracker, plus the
//! background queue that keeps whole-table scans off the request path.
//!
//! ## Overview
//!
//! For every swarm (20-byte info hash) the store keeps the peers currently
//! taking part and answers announce and scrape queries against them. Swarms
//! are sharded by the leading bits of their info hash; a single bounded lock
//! list grants exclusive access to one shard at a time. Peers age through a
//! ring of generation buckets that a Reaper thread advances, so no per-peer
//! timers exist. Full scrapes, statistics and reaping are queued as tasks and
//! computed by worker threads one shard at a time.
//!
//! Protocol parsing, access lists and persistence live outside this crate:
//! they call into `TorrentTracker` with already decoded `(hash, peer, flags)`
//! tuples.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_swarm::config::structs::configuration::Configuration;
//! use torrust_swarm::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = TorrentTracker::new(config);
//! let reply = tracker.announce(info_hash, peer_key, flags, 50)?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared utilities, error handling, and helper functions
//! - [`config`] - Configuration management and TOML parsing
//! - [`stats`] - Real-time statistics tracking
//! - [`structs`] - CLI argument parsing
//! - [`tasks`] - Work queue and worker threads for whole-table scans
//! - [`tracker`] - Swarm store, generational peer pools and the Reaper

/// Common utilities and shared functionality.
///
/// Contains helper functions for hex conversion, logging setup, timestamps,
/// shutdown waiting and the boot-time error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Statistics tracking module.
///
/// Collects real-time counters on store activity: swarm and peer totals,
/// request counts, scan throughput and Reaper sweeps.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Background work queue.
///
/// Hands full scrapes, statistics reports and reaping to long-lived worker
/// threads and parks their results until the requester collects them.
pub mod tasks;

/// Core swarm store.
///
/// Contains the sharded swarm table, the shard lock manager, generational
/// peer pools, the Reaper and the `TorrentTracker` facade.
pub mod tracker;
