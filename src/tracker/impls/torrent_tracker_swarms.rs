use std::cmp::Reverse;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::sorted_vector::SortedVector;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_entry::SwarmEntry;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;
use crate::tracker::structs::swarm_totals::SwarmTotals;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Seed, peer and download counts of one swarm; zeros when unknown.
    #[tracing::instrument(level = "debug")]
    pub fn scrape_one(&self, info_hash: InfoHash) -> Result<SwarmMetadata, StoreError>
    {
        let shard = self.swarms.lock_for(&info_hash)?;
        self.bump_stats(StatsEvent::Scrapes, 1);
        Ok(shard.find(&info_hash).map(Swarm::metadata).unwrap_or_default())
    }

    /// Drops a swarm and all its peers. Returns whether it existed.
    #[tracing::instrument(level = "debug")]
    pub fn remove_swarm(&self, info_hash: InfoHash) -> Result<bool, StoreError>
    {
        let mut shard = self.swarms.lock_for(&info_hash)?;
        match shard.remove(&info_hash) {
            None => Ok(false),
            Some(swarm) => {
                let metadata = swarm.metadata();
                self.bump_stats(StatsEvent::Swarms, -1);
                self.bump_stats(StatsEvent::Peers, -(metadata.peers as i64));
                self.bump_stats(StatsEvent::Seeds, -(metadata.seeds as i64));
                Ok(true)
            }
        }
    }

    /// Visits every swarm, holding one shard lock at a time.
    pub fn iterate_all_swarms<F>(&self, mut visitor: F) -> Result<(), StoreError>
    where
        F: FnMut(&Swarm),
    {
        self.for_each_shard(|_, swarms| {
            for swarm in swarms.iter() {
                visitor(swarm);
            }
        })
    }

    /// Locks, visits and releases every shard in index order.
    pub(crate) fn for_each_shard<F>(&self, mut visit: F) -> Result<(), StoreError>
    where
        F: FnMut(usize, &mut SortedVector<Swarm>),
    {
        for index in 0..self.swarms.shard_count() {
            let mut shard = self.swarms.lock_shard(index)?;
            visit(index, &mut shard);
        }
        Ok(())
    }

    pub fn swarm_totals(&self) -> Result<SwarmTotals, StoreError>
    {
        let mut totals = SwarmTotals::default();
        self.iterate_all_swarms(|swarm| {
            let metadata = swarm.metadata();
            totals.torrents += 1;
            totals.peers += metadata.peers;
            totals.seeds += metadata.seeds;
            totals.downloads += metadata.downloads;
        })?;
        Ok(totals)
    }

    /// The `limit` swarms with the most peers, largest first.
    pub fn top_swarms(&self, limit: usize) -> Result<Vec<SwarmEntry>, StoreError>
    {
        let mut top: Vec<SwarmEntry> = Vec::with_capacity(limit + 1);
        if limit == 0 {
            return Ok(top);
        }
        self.iterate_all_swarms(|swarm| {
            let metadata = swarm.metadata();
            if top.len() == limit && top.last().is_some_and(|last| last.metadata.peers >= metadata.peers) {
                return;
            }
            let entry = SwarmEntry { info_hash: swarm.hash, metadata };
            let position = top.partition_point(|existing| existing.metadata.peers >= metadata.peers);
            top.insert(position, entry);
            top.truncate(limit);
        })?;
        top.sort_by_key(|entry| (Reverse(entry.metadata.peers), entry.info_hash));
        Ok(top)
    }
}
