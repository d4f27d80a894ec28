use std::time::Duration;
use byteorder::{BigEndian, WriteBytesExt};
use log::debug;
use serde_json::json;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::requester::Requester;
use crate::tasks::types::ResultBuffers;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Bytes per swarm in a full scrape: hash, seeds, downloads, leechers.
pub const FULL_SCRAPE_RECORD_SIZE: usize = 20 + 4 + 4 + 4;

/// Swarms listed in the `top_swarms` section of a statistics report.
pub const STATS_TOP_SWARMS: usize = 10;

impl TorrentTracker {
    /// Queues a whole-table job on behalf of `requester`.
    #[tracing::instrument(level = "debug")]
    pub fn submit_full_scan(&self, requester: Requester, kind: TaskKind) -> Result<(), StoreError>
    {
        self.work_queue.push_task(requester, kind)?;
        self.bump_stats(StatsEvent::ScansSubmitted, 1);
        Ok(())
    }

    /// Forgets every job of `requester`, finished or not.
    pub fn cancel_scan(&self, requester: Requester) -> usize
    {
        let removed = self.work_queue.cancel_task(requester);
        if removed > 0 {
            debug!("[TASKS] Canceled {removed} task(s) for {requester}");
            self.bump_stats(StatsEvent::ScansCanceled, removed as i64);
        }
        removed
    }

    pub fn poll_scan_result(&self) -> Option<(Requester, ResultBuffers)>
    {
        self.work_queue.pop_result()
    }

    pub fn wait_scan_result(&self, timeout: Duration) -> Option<(Requester, ResultBuffers)>
    {
        self.work_queue.wait_result(timeout)
    }

    /// Every swarm as a fixed-size binary record, split into buffers of at
    /// most `workers.scan_chunk_size` bytes (always at least one record).
    /// Counters wider than 32 bits saturate.
    pub fn full_scrape_buffers(&self) -> Result<ResultBuffers, StoreError>
    {
        let chunk_size = self.config.workers.scan_chunk_size.max(FULL_SCRAPE_RECORD_SIZE);
        let mut buffers: ResultBuffers = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        let mut failure: Option<std::io::Error> = None;

        self.iterate_all_swarms(|swarm| {
            if failure.is_some() {
                return;
            }
            if current.len() + FULL_SCRAPE_RECORD_SIZE > chunk_size {
                buffers.push(std::mem::take(&mut current));
            }
            let metadata = swarm.metadata();
            current.extend_from_slice(&swarm.hash.0);
            let written = current.write_u32::<BigEndian>(saturate(metadata.seeds))
                .and_then(|_| current.write_u32::<BigEndian>(saturate(metadata.downloads)))
                .and_then(|_| current.write_u32::<BigEndian>(saturate(metadata.leechers())));
            if let Err(error) = written {
                failure = Some(error);
            }
        })?;

        if let Some(error) = failure {
            return Err(error.into());
        }
        if !current.is_empty() {
            buffers.push(current);
        }
        Ok(buffers)
    }

    /// JSON report: scanned totals, the largest swarms and all counters.
    pub fn stats_report(&self) -> Result<Vec<u8>, StoreError>
    {
        let totals = self.swarm_totals()?;
        let top_swarms = self.top_swarms(STATS_TOP_SWARMS)?;
        let report = json!({
            "generation": self.clock.now(),
            "totals": totals,
            "top_swarms": top_swarms,
            "counters": self.get_stats(),
        });
        Ok(serde_json::to_vec(&report)?)
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
