use std::sync::atomic::{AtomicU64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::cleanup_summary::CleanupSummary;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl CleanupStats {
    pub(crate) fn new() -> Self {
        Self {
            swarms_visited: AtomicU64::new(0),
            torrents: AtomicU64::new(0),
            seeds: AtomicU64::new(0),
            peers: AtomicU64::new(0),
        }
    }

    pub(crate) fn add_visited(&self, n: u64) {
        self.swarms_visited.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn add_torrents(&self, n: u64) {
        self.torrents.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn add_seeds(&self, n: u64) {
        self.seeds.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn add_peers(&self, n: u64) {
        self.peers.fetch_add(n, Ordering::Relaxed);
    }

    /// Moves the collected removals into the tracker's counters and returns
    /// them as a summary. Counters are reset to zero.
    pub(crate) fn apply_to_tracker(&self, tracker: &TorrentTracker, generation: u64) -> CleanupSummary {
        let summary = CleanupSummary {
            generation,
            swarms_visited: self.swarms_visited.swap(0, Ordering::Relaxed),
            swarms_removed: self.torrents.swap(0, Ordering::Relaxed),
            peers_removed: self.peers.swap(0, Ordering::Relaxed),
            seeds_removed: self.seeds.swap(0, Ordering::Relaxed),
        };
        if summary.swarms_removed > 0 {
            tracker.update_stats(StatsEvent::Swarms, -(summary.swarms_removed as i64));
            tracker.update_stats(StatsEvent::SwarmsReaped, summary.swarms_removed as i64);
        }
        if summary.seeds_removed > 0 {
            tracker.update_stats(StatsEvent::Seeds, -(summary.seeds_removed as i64));
        }
        if summary.peers_removed > 0 {
            tracker.update_stats(StatsEvent::Peers, -(summary.peers_removed as i64));
            tracker.update_stats(StatsEvent::PeersReaped, summary.peers_removed as i64);
        }
        tracker.update_stats(StatsEvent::ReapSweeps, 1);
        summary
    }
}
