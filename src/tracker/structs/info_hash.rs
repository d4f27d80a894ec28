//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash, the identity of a swarm.
///
/// Ordering is byte-wise, which is the order swarms are kept in inside a shard.
/// The leading bits select the shard (see `SwarmTable::shard_of`).
///
/// # Example
///
/// ```rust
/// use torrust_swarm::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// let bytes: &[u8; 20] = &hash.0;
/// assert_eq!(bytes.len(), 20);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct InfoHash(pub [u8; 20]);
