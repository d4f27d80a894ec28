//! Real-time statistics tracking.
//!
//! This module provides atomic counters for store activity: swarm and peer
//! totals, request counts, background scan throughput and Reaper sweeps.
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from request threads, workers and the Reaper without a global lock.
//! Totals maintained here are deltas applied under each shard lock, so a
//! snapshot is approximate while mutations are in flight. `swarm_totals()`
//! gives the scanned figure.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::stats::enums::stats_event::StatsEvent;
//!
//! // Update statistics
//! tracker.update_stats(StatsEvent::Announces, 1);
//!
//! // Read statistics
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
