use serde::{Deserialize, Serialize};

/// Point-in-time copy of every counter, plus the lock manager's diagnostics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_reap: i64,
    pub timestamp_run_console: i64,
    pub swarms: i64,
    pub seeds: i64,
    pub peers: i64,
    pub completed: i64,
    pub announces: i64,
    pub scrapes: i64,
    pub upsert_failures: i64,
    pub scans_submitted: i64,
    pub scans_completed: i64,
    pub scans_canceled: i64,
    pub scans_failed: i64,
    pub results_discarded: i64,
    pub reap_sweeps: i64,
    pub swarms_reaped: i64,
    pub peers_reaped: i64,
    pub lock_stalls: u64,
    pub lock_violations: u64,
}
