use serde::{Deserialize, Serialize};

/// Bitset of announce state carried with a peer record. Not part of its identity.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PeerFlags(pub u8);
