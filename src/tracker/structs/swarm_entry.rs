use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;

/// A swarm's hash with its counts, detached from the shard lock.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwarmEntry {
    pub info_hash: InfoHash,
    #[serde(flatten)]
    pub metadata: SwarmMetadata,
}
