use std::sync::atomic::AtomicU64;

/// Running totals of one Reaper sweep, shared by the shard visits.
#[derive(Debug, Default)]
pub struct CleanupStats {
    pub swarms_visited: AtomicU64,
    pub torrents: AtomicU64,
    pub seeds: AtomicU64,
    pub peers: AtomicU64,
}
