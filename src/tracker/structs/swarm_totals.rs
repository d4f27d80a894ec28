use serde::{Deserialize, Serialize};

/// Sums over every swarm, gathered one shard at a time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwarmTotals {
    pub torrents: u64,
    pub peers: u64,
    pub seeds: u64,
    pub downloads: u64,
}
