use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_reap: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub swarms: AtomicI64,
    pub seeds: AtomicI64,
    pub peers: AtomicI64,
    pub completed: AtomicI64,
    pub announces: AtomicI64,
    pub scrapes: AtomicI64,
    pub upsert_failures: AtomicI64,
    pub scans_submitted: AtomicI64,
    pub scans_completed: AtomicI64,
    pub scans_canceled: AtomicI64,
    pub scans_failed: AtomicI64,
    pub results_discarded: AtomicI64,
    pub reap_sweeps: AtomicI64,
    pub swarms_reaped: AtomicI64,
    pub peers_reaped: AtomicI64,
}
