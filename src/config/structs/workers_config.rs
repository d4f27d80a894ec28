use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkersConfig {
    pub full_scrape_threads: usize,
    pub stats_threads: usize,
    pub reap_threads: usize,
    pub reaper_interval: u64,
    pub scan_chunk_size: usize,
}
