use std::sync::Arc;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::work_queue::WorkQueue;
use crate::tasks::types::ResultBuffers;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::generation_clock::GenerationClock;
use crate::tracker::structs::swarm_table::SwarmTable;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let clock = GenerationClock::new(config.store.generation_secs);
        Self::with_clock(config, clock)
    }

    /// Builds a tracker around an existing clock, e.g. `GenerationClock::manual`.
    pub fn with_clock(config: Arc<Configuration>, clock: GenerationClock) -> TorrentTracker
    {
        let store = &config.store;
        let swarms = SwarmTable::new(store.shard_bits, store.lock_slots);
        info!(
            "[BOOT] Swarm table ready: {} shards, {} lock slots, generation {} ({}s quantum)",
            swarms.shard_count(), store.lock_slots, clock.now(), clock.quantum_secs()
        );
        TorrentTracker {
            config: config.clone(),
            swarms,
            clock,
            stats: Arc::new(StatsAtomics::new()),
            work_queue: Arc::new(WorkQueue::new()),
        }
    }

    /// Cooperative shutdown: every thread blocked on a shard lock or on the
    /// work queue wakes up with `ShuttingDown`.
    pub fn shutdown(&self)
    {
        info!("[BOOT] Shutting down swarm store...");
        self.work_queue.shutdown();
        self.swarms.locks().shutdown();
    }

    pub fn is_shutdown(&self) -> bool
    {
        self.swarms.locks().is_shutdown()
    }

    /// Computes the result of a claimed task. Called by the worker threads.
    pub fn run_task(&self, kind: TaskKind) -> Result<ResultBuffers, StoreError>
    {
        match kind {
            TaskKind::FullScrape => self.full_scrape_buffers(),
            TaskKind::Stats => Ok(vec![self.stats_report()?]),
            TaskKind::Reap => {
                let summary = self.reap_all()?;
                Ok(vec![serde_json::to_vec(&summary)?])
            }
        }
    }
}
