use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        let locks = self.swarms.locks();
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_reap: self.stats.timestamp_run_reap.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            swarms: self.stats.swarms.load(Ordering::SeqCst),
            seeds: self.stats.seeds.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            completed: self.stats.completed.load(Ordering::SeqCst),
            announces: self.stats.announces.load(Ordering::SeqCst),
            scrapes: self.stats.scrapes.load(Ordering::SeqCst),
            upsert_failures: self.stats.upsert_failures.load(Ordering::SeqCst),
            scans_submitted: self.stats.scans_submitted.load(Ordering::SeqCst),
            scans_completed: self.stats.scans_completed.load(Ordering::SeqCst),
            scans_canceled: self.stats.scans_canceled.load(Ordering::SeqCst),
            scans_failed: self.stats.scans_failed.load(Ordering::SeqCst),
            results_discarded: self.stats.results_discarded.load(Ordering::SeqCst),
            reap_sweeps: self.stats.reap_sweeps.load(Ordering::SeqCst),
            swarms_reaped: self.stats.swarms_reaped.load(Ordering::SeqCst),
            peers_reaped: self.stats.peers_reaped.load(Ordering::SeqCst),
            lock_stalls: locks.stalls(),
            lock_violations: locks.violations(),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.stats.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    /// Adds `value` without building a snapshot, for the request path.
    #[inline(always)]
    pub(crate) fn bump_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.counter(event).fetch_add(value, Ordering::Relaxed);
    }
}
