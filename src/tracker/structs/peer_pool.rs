//! Per-swarm generational ring of peer buckets.

use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::sorted_vector::SortedVector;

/// Depth of the generational ring. A peer that stops announcing is purged
/// between `POOLS_COUNT - 1` and `POOLS_COUNT` generations after its last announce.
pub const POOLS_COUNT: usize = 9;

/// Peers of one swarm, bucketed by the generation they last announced in.
///
/// `buckets[0]` is the generation `base_generation`, `buckets[i]` the one `i`
/// generations before it. Reaping shifts buckets towards the end of the ring
/// and drops whatever falls off, so expiry needs neither timers nor a scan of
/// individual peers.
///
/// Invariants: `peer_count` is the sum of bucket lengths, `seed_count` the
/// sum of `seed_counts`, and `seed_counts[i]` the number of seeding records
/// in `buckets[i]`. `download_count` only grows.
#[derive(Debug, Clone, Default)]
pub struct PeerPool {
    pub(crate) base_generation: u64,
    pub(crate) peer_count: usize,
    pub(crate) seed_count: usize,
    pub(crate) download_count: u64,
    pub(crate) buckets: [SortedVector<PeerRecord>; POOLS_COUNT],
    pub(crate) seed_counts: [usize; POOLS_COUNT],
}
