use log::{debug, info, warn};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::reap_outcome::ReapOutcome;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::cleanup_summary::CleanupSummary;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// One Reaper sweep at the clock's current generation: ages every
    /// swarm's ring and drops exhausted swarms, one shard at a time.
    ///
    /// Running it twice at the same generation changes nothing the second time.
    /// When a shard cannot be locked the sweep stops there, but removals from
    /// the shards already visited still reach the counters.
    #[tracing::instrument(level = "debug")]
    pub fn reap_all(&self) -> Result<CleanupSummary, StoreError>
    {
        let generation = self.clock.now();
        let idle_limit = self.config.store.torrent_idle_generations;
        let cleanup = CleanupStats::new();

        let sweep = self.for_each_shard(|index, swarms| {
            let visited = swarms.len() as u64;
            let removed = swarms.retain_mut(|swarm| {
                match swarm.pool.reap(generation, idle_limit) {
                    ReapOutcome::Current | ReapOutcome::Retained => true,
                    ReapOutcome::Aged { peers, seeds } => {
                        cleanup.add_peers(peers as u64);
                        cleanup.add_seeds(seeds as u64);
                        true
                    }
                    ReapOutcome::Exhausted => {
                        cleanup.add_peers(swarm.pool.peer_count() as u64);
                        cleanup.add_seeds(swarm.pool.seed_count() as u64);
                        false
                    }
                }
            });
            cleanup.add_visited(visited);
            cleanup.add_torrents(removed as u64);
            if removed > 0 {
                debug!("[REAPER] Shard {index}: removed {removed} swarm(s)");
            }
        });

        // Shards visited before a failed lock are already reaped; count them either way.
        let summary = cleanup.apply_to_tracker(self, generation);
        if let Err(error) = sweep {
            warn!(
                "[REAPER] Generation {}: sweep interrupted after removing {} swarms, {} peers: {error}",
                summary.generation, summary.swarms_removed, summary.peers_removed
            );
            return Err(error);
        }
        self.set_stats(StatsEvent::TimestampReap, chrono::Utc::now().timestamp());
        info!(
            "[REAPER] Generation {}: visited {} swarms, removed {} swarms, {} peers ({} seeds)",
            summary.generation, summary.swarms_visited, summary.swarms_removed, summary.peers_removed, summary.seeds_removed
        );
        Ok(summary)
    }
}
