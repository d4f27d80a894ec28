//! Peer identity inside a swarm.

/// IPv4 address and port in network byte order, 6 bytes in total.
///
/// This is the whole identity of a peer: two announces with the same address
/// and port refer to the same record regardless of what else they carry.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct PeerKey(pub [u8; 6]);
