use serde::{Deserialize, Serialize};

/// Outcome of a finished Reaper sweep, also the payload of a REAP task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub generation: u64,
    pub swarms_visited: u64,
    pub swarms_removed: u64,
    pub peers_removed: u64,
    pub seeds_removed: u64,
}
