use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_pool::PeerPool;

/// The peers of one info hash. Lives in the sorted vector of its shard.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub hash: InfoHash,
    pub pool: PeerPool,
}
