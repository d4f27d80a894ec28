use log::warn;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::announce_reply::AnnounceReply;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_flags::PeerFlags;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::shard_guard::ShardGuard;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Inserts or refreshes a peer in the current generation, creating the
    /// swarm on first sight. A STOPPED flag removes the peer instead.
    ///
    /// On `OutOfMemory` the swarm is left exactly as it was.
    #[tracing::instrument(level = "debug")]
    pub fn upsert_peer(&self, info_hash: InfoHash, peer_key: PeerKey, flags: PeerFlags) -> Result<SwarmMetadata, StoreError>
    {
        let mut shard = self.swarms.lock_for(&info_hash)?;
        if flags.is_stopped() {
            return Ok(self.remove_locked(&mut shard, &info_hash, &peer_key));
        }
        self.upsert_locked(&mut shard, info_hash, peer_key, flags)
    }

    /// Removes a peer from whichever generation holds it. No-op when absent.
    #[tracing::instrument(level = "debug")]
    pub fn remove_peer(&self, info_hash: InfoHash, peer_key: PeerKey) -> Result<(), StoreError>
    {
        let mut shard = self.swarms.lock_for(&info_hash)?;
        self.remove_locked(&mut shard, &info_hash, &peer_key);
        Ok(())
    }

    /// Up to `max_count` peers of the swarm, capped by `store.max_peers_returned`.
    #[tracing::instrument(level = "debug")]
    pub fn sample_peers(&self, info_hash: InfoHash, max_count: usize) -> Result<Vec<PeerRecord>, StoreError>
    {
        let max_count = max_count.min(self.config.store.max_peers_returned);
        let shard = self.swarms.lock_for(&info_hash)?;
        Ok(shard.find(&info_hash).map(|swarm| swarm.pool.sample(max_count)).unwrap_or_default())
    }

    /// Upsert followed by a peer sample, both under one shard lock.
    #[tracing::instrument(level = "debug")]
    pub fn announce(&self, info_hash: InfoHash, peer_key: PeerKey, flags: PeerFlags, max_count: usize) -> Result<AnnounceReply, StoreError>
    {
        let max_count = max_count.min(self.config.store.max_peers_returned);
        let mut shard = self.swarms.lock_for(&info_hash)?;
        self.bump_stats(StatsEvent::Announces, 1);

        if flags.is_stopped() {
            let metadata = self.remove_locked(&mut shard, &info_hash, &peer_key);
            return Ok(AnnounceReply { metadata, peers: Vec::new() });
        }

        let metadata = self.upsert_locked(&mut shard, info_hash, peer_key, flags)?;
        let peers = shard.find(&info_hash).map(|swarm| swarm.pool.sample(max_count)).unwrap_or_default();
        Ok(AnnounceReply { metadata, peers })
    }

    fn upsert_locked(&self, shard: &mut ShardGuard<'_>, info_hash: InfoHash, peer_key: PeerKey, flags: PeerFlags) -> Result<SwarmMetadata, StoreError>
    {
        let generation = self.clock.now();
        let (swarm, created) = match shard.find_or_insert_with(&info_hash, || Swarm::new(info_hash, generation)) {
            Ok(slot) => slot,
            Err(error) => {
                warn!("[PEERS] Unable to create swarm {info_hash}: {error}");
                self.bump_stats(StatsEvent::UpsertFailures, 1);
                return Err(error);
            }
        };

        let before = swarm.metadata();
        let result = swarm.pool.upsert(PeerRecord::new(peer_key, flags), generation);
        let after = swarm.metadata();

        if let Err(error) = result {
            if created {
                shard.remove(&info_hash);
            }
            warn!("[PEERS] Unable to store peer {peer_key} in {info_hash}: {error}");
            self.bump_stats(StatsEvent::UpsertFailures, 1);
            return Err(error);
        }

        if created {
            self.bump_stats(StatsEvent::Swarms, 1);
        }
        self.record_delta(before, after);
        Ok(after)
    }

    fn remove_locked(&self, shard: &mut ShardGuard<'_>, info_hash: &InfoHash, peer_key: &PeerKey) -> SwarmMetadata
    {
        let Some(swarm) = shard.find_mut(info_hash) else {
            return SwarmMetadata::default();
        };
        let before = swarm.metadata();
        swarm.pool.remove(peer_key);
        let after = swarm.metadata();
        self.record_delta(before, after);
        after
    }

    fn record_delta(&self, before: SwarmMetadata, after: SwarmMetadata)
    {
        let peers = after.peers as i64 - before.peers as i64;
        let seeds = after.seeds as i64 - before.seeds as i64;
        let downloads = after.downloads as i64 - before.downloads as i64;
        if peers != 0 { self.bump_stats(StatsEvent::Peers, peers); }
        if seeds != 0 { self.bump_stats(StatsEvent::Seeds, seeds); }
        if downloads != 0 { self.bump_stats(StatsEvent::Completed, downloads); }
    }
}
