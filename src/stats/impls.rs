//! Statistics implementation blocks.

/// Atomic counter construction.
pub mod stats_atomics;

/// `TorrentTracker` statistics accessors.
pub mod torrent_tracker;
