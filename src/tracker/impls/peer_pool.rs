use rand::RngExt;
use crate::tracker::enums::reap_outcome::ReapOutcome;
use crate::tracker::enums::upsert_outcome::UpsertOutcome;
use crate::tracker::errors::StoreError;
use crate::tracker::structs::peer_flags::PeerFlags;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_pool::{PeerPool, POOLS_COUNT};
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;

impl PeerPool {
    pub fn new(generation: u64) -> PeerPool {
        PeerPool {
            base_generation: generation,
            ..Default::default()
        }
    }

    #[inline(always)]
    pub fn peer_count(&self) -> usize {
        self.peer_count
    }

    #[inline(always)]
    pub fn seed_count(&self) -> usize {
        self.seed_count
    }

    #[inline(always)]
    pub fn download_count(&self) -> u64 {
        self.download_count
    }

    #[inline(always)]
    pub fn base_generation(&self) -> u64 {
        self.base_generation
    }

    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map(|b| b.len()).unwrap_or(0)
    }

    pub fn metadata(&self) -> SwarmMetadata {
        SwarmMetadata {
            seeds: self.seed_count as u64,
            peers: self.peer_count as u64,
            downloads: self.download_count,
        }
    }

    /// Every stored record, newest generation first.
    pub fn iter(&self) -> impl Iterator<Item = &PeerRecord> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Which generation bucket currently holds `key`.
    pub fn locate(&self, key: &PeerKey) -> Option<usize> {
        self.buckets.iter().position(|bucket| bucket.find(key).is_some())
    }

    /// Inserts or refreshes `record` in the current generation bucket.
    ///
    /// COMPLETED is sticky: once a record carried it, refreshes keep it, and
    /// `download_count` grows only the first time it appears.
    pub fn upsert(&mut self, record: PeerRecord, generation: u64) -> Result<UpsertOutcome, StoreError> {
        if self.peer_count == 0 && generation > self.base_generation {
            self.base_generation = generation;
        }

        if let Some(stored) = self.buckets[0].find_mut(&record.key) {
            let was_seeding = stored.flags.is_seeding();
            let was_completed = stored.flags.is_completed();
            stored.flags = record.flags;
            if was_completed {
                stored.flags.insert(PeerFlags::COMPLETED);
            }
            let is_seeding = stored.flags.is_seeding();

            if record.flags.is_completed() && !was_completed {
                self.download_count += 1;
            }
            match (was_seeding, is_seeding) {
                (false, true) => {
                    self.seed_count += 1;
                    self.seed_counts[0] += 1;
                }
                (true, false) => {
                    self.seed_count -= 1;
                    self.seed_counts[0] -= 1;
                }
                _ => {}
            }
            return Ok(UpsertOutcome::Refreshed);
        }

        let previous = (1..POOLS_COUNT)
            .find_map(|bucket| self.buckets[bucket].find(&record.key).map(|stored| (bucket, stored.flags)));

        let mut flags = record.flags;
        let was_completed = previous.map(|(_, old)| old.is_completed()).unwrap_or(false);
        if was_completed {
            flags.insert(PeerFlags::COMPLETED);
        }

        // Insert first: a failed allocation must leave the older record in place.
        self.buckets[0].find_or_insert_with(&record.key, || PeerRecord::new(record.key, flags))?;

        if let Some((bucket, old_flags)) = previous {
            self.buckets[bucket].remove(&record.key);
            self.peer_count -= 1;
            if old_flags.is_seeding() {
                self.seed_count -= 1;
                self.seed_counts[bucket] -= 1;
            }
        }

        self.peer_count += 1;
        if flags.is_seeding() {
            self.seed_count += 1;
            self.seed_counts[0] += 1;
        }
        if record.flags.is_completed() && !was_completed {
            self.download_count += 1;
        }

        Ok(match previous {
            None => UpsertOutcome::Inserted,
            Some(_) => UpsertOutcome::Promoted,
        })
    }

    /// Removes `key` from whichever bucket holds it.
    pub fn remove(&mut self, key: &PeerKey) -> Option<PeerRecord> {
        for bucket in 0..POOLS_COUNT {
            if let Some(record) = self.buckets[bucket].remove(key) {
                self.peer_count -= 1;
                if record.flags.is_seeding() {
                    self.seed_count -= 1;
                    self.seed_counts[bucket] -= 1;
                }
                return Some(record);
            }
        }
        None
    }

    /// Ages the ring to `current`. Only the Reaper calls this.
    ///
    /// `idle_limit` is the number of generations without any announce after
    /// which the swarm is dropped whatever it still holds.
    pub fn reap(&mut self, current: u64, idle_limit: u64) -> ReapOutcome {
        let elapsed = current.saturating_sub(self.base_generation);
        if elapsed == 0 {
            return ReapOutcome::Current;
        }
        if elapsed > idle_limit {
            return ReapOutcome::Exhausted;
        }

        let mut shift = elapsed as usize;
        if elapsed > POOLS_COUNT as u64 {
            if self.peer_count == 0 {
                return if self.download_count > 0 {
                    ReapOutcome::Retained
                } else {
                    ReapOutcome::Exhausted
                };
            }
            shift = POOLS_COUNT;
        }

        let (peers_before, seeds_before) = (self.peer_count, self.seed_count);

        let expired_from = POOLS_COUNT - shift;
        for bucket in &mut self.buckets[expired_from..] {
            bucket.clear();
        }
        self.seed_counts[expired_from..].fill(0);
        self.buckets.rotate_right(shift % POOLS_COUNT);
        self.seed_counts.rotate_right(shift % POOLS_COUNT);

        self.peer_count = self.buckets.iter().map(|bucket| bucket.len()).sum();
        self.seed_count = self.seed_counts.iter().sum();

        self.base_generation = if self.peer_count > 0 {
            current
        } else {
            current.saturating_sub(POOLS_COUNT as u64)
        };

        ReapOutcome::Aged {
            peers: peers_before - self.peer_count,
            seeds: seeds_before - self.seed_count,
        }
    }

    /// Up to `max` distinct peers.
    ///
    /// With enough room every peer is returned, newest generation first.
    /// Otherwise the buckets are treated as one concatenated sequence, rotated
    /// by a random offset and cut into `max` windows of near-equal length; one
    /// random peer is taken from each window, so picks never repeat and cover
    /// every generation in proportion to its size.
    pub fn sample(&self, max: usize) -> Vec<PeerRecord> {
        let total = self.peer_count;
        if max == 0 || total == 0 {
            return Vec::new();
        }
        if max >= total {
            return self.iter().copied().collect();
        }

        let mut rng = rand::rng();
        let start = rng.random_range(0..total);
        (0..max)
            .filter_map(|step| {
                let lower = (step * total) / max;
                let upper = ((step + 1) * total) / max;
                let position = (start + lower + rng.random_range(0..upper - lower)) % total;
                self.record_at(position)
            })
            .collect()
    }

    /// The record at `position` of the concatenated buckets.
    fn record_at(&self, mut position: usize) -> Option<PeerRecord> {
        for bucket in &self.buckets {
            if position < bucket.len() {
                return bucket.as_slice().get(position).copied();
            }
            position -= bucket.len();
        }
        None
    }
}
