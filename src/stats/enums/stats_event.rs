//! Statistics event types for tracking store activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant selects one counter. Used with `TorrentTracker::update_stats()`
/// to add a (possibly negative) delta, or `set_stats()` to overwrite it.
///
/// # Categories
///
/// - **Store totals**: Swarms, Seeds, Peers, Completed
/// - **Requests**: Announces, Scrapes, UpsertFailures
/// - **Scans**: Scans*, ResultsDiscarded
/// - **Reaper**: ReapSweeps, SwarmsReaped, PeersReaped, TimestampReap
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Started,
    TimestampReap,
    TimestampConsole,
    Swarms,
    Seeds,
    Peers,
    Completed,
    Announces,
    Scrapes,
    UpsertFailures,
    ScansSubmitted,
    ScansCompleted,
    ScansCanceled,
    ScansFailed,
    ResultsDiscarded,
    ReapSweeps,
    SwarmsReaped,
    PeersReaped,
}
