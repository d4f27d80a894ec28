use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_pool::PeerPool;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;
use crate::tracker::traits::sort_key::SortKey;

impl Swarm {
    pub fn new(hash: InfoHash, generation: u64) -> Swarm {
        Swarm {
            hash,
            pool: PeerPool::new(generation),
        }
    }

    pub fn metadata(&self) -> SwarmMetadata {
        self.pool.metadata()
    }
}

impl SortKey for Swarm {
    type Key = InfoHash;

    #[inline(always)]
    fn sort_key(&self) -> &InfoHash {
        &self.hash
    }
}
