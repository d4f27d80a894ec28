use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tasks::structs::work_queue::WorkQueue;
use crate::tracker::structs::generation_clock::GenerationClock;
use crate::tracker::structs::swarm_table::SwarmTable;

/// The store facade: swarms, the generation clock, counters and the scan queue.
#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub swarms: SwarmTable,
    pub clock: GenerationClock,
    pub stats: Arc<StatsAtomics>,
    pub work_queue: Arc<WorkQueue>,
}
