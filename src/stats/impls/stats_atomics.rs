use std::sync::atomic::AtomicI64;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            timestamp_run_reap: AtomicI64::new(0),
            timestamp_run_console: AtomicI64::new(0),
            swarms: AtomicI64::new(0),
            seeds: AtomicI64::new(0),
            peers: AtomicI64::new(0),
            completed: AtomicI64::new(0),
            announces: AtomicI64::new(0),
            scrapes: AtomicI64::new(0),
            upsert_failures: AtomicI64::new(0),
            scans_submitted: AtomicI64::new(0),
            scans_completed: AtomicI64::new(0),
            scans_canceled: AtomicI64::new(0),
            scans_failed: AtomicI64::new(0),
            results_discarded: AtomicI64::new(0),
            reap_sweeps: AtomicI64::new(0),
            swarms_reaped: AtomicI64::new(0),
            peers_reaped: AtomicI64::new(0),
        }
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Started => &self.started,
            StatsEvent::TimestampReap => &self.timestamp_run_reap,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::Swarms => &self.swarms,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Peers => &self.peers,
            StatsEvent::Completed => &self.completed,
            StatsEvent::Announces => &self.announces,
            StatsEvent::Scrapes => &self.scrapes,
            StatsEvent::UpsertFailures => &self.upsert_failures,
            StatsEvent::ScansSubmitted => &self.scans_submitted,
            StatsEvent::ScansCompleted => &self.scans_completed,
            StatsEvent::ScansCanceled => &self.scans_canceled,
            StatsEvent::ScansFailed => &self.scans_failed,
            StatsEvent::ResultsDiscarded => &self.results_discarded,
            StatsEvent::ReapSweeps => &self.reap_sweeps,
            StatsEvent::SwarmsReaped => &self.swarms_reaped,
            StatsEvent::PeersReaped => &self.peers_reaped,
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
