use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConfig {
    pub shard_bits: u32,
    pub lock_slots: usize,
    pub generation_secs: u64,
    pub torrent_idle_generations: u64,
    pub max_peers_returned: usize,
}
