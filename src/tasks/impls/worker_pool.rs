use std::sync::Arc;
use std::thread;
use log::{debug, error, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::worker_pool::WorkerPool;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl WorkerPool {
    /// Spawns the configured number of workers for every task kind.
    pub fn start(tracker: Arc<TorrentTracker>) -> Result<WorkerPool, StoreError> {
        let workers = &tracker.config.workers;
        let plan = [
            (TaskKind::FullScrape, workers.full_scrape_threads),
            (TaskKind::Stats, workers.stats_threads),
            (TaskKind::Reap, workers.reap_threads),
        ];

        let mut pool = WorkerPool { handles: Vec::new() };
        for (kind, count) in plan {
            for n in 0..count {
                let tracker_clone = tracker.clone();
                let handle = thread::Builder::new()
                    .name(format!("worker-{kind}-{n}"))
                    .spawn(move || Self::run(tracker_clone, kind))?;
                pool.handles.push(handle);
            }
            info!("[BOOT] Started {count} {kind} worker(s)");
        }
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every worker to exit. Call after `TorrentTracker::shutdown`.
    pub fn join(self) {
        for handle in self.handles {
            if handle.join().is_err() {
                error!("[WORKER] A worker thread panicked");
            }
        }
    }

    fn run(tracker: Arc<TorrentTracker>, kind: TaskKind) {
        loop {
            let id = match tracker.work_queue.pop_task(kind) {
                Ok(id) => id,
                Err(_) => {
                    debug!("[WORKER] {kind} worker shutting down");
                    return;
                }
            };

            let buffers = match tracker.run_task(kind) {
                Ok(buffers) => buffers,
                Err(StoreError::ShuttingDown) => {
                    debug!("[WORKER] {kind} task {id} interrupted by shutdown");
                    return;
                }
                Err(error) => {
                    error!("[WORKER] {kind} task {id} failed: {error}");
                    tracker.work_queue.fail_task(id);
                    tracker.bump_stats(StatsEvent::ScansFailed, 1);
                    continue;
                }
            };

            if tracker.work_queue.push_result(id, buffers) {
                tracker.bump_stats(StatsEvent::ScansCompleted, 1);
            } else {
                tracker.bump_stats(StatsEvent::ResultsDiscarded, 1);
            }
        }
    }
}
