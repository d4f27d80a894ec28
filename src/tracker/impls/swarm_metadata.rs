use crate::tracker::structs::swarm_metadata::SwarmMetadata;

impl SwarmMetadata {
    pub fn leechers(&self) -> u64 {
        self.peers.saturating_sub(self.seeds)
    }
}
