use serde::Serialize;
use crate::tracker::structs::peer_flags::PeerFlags;
use crate::tracker::structs::peer_key::PeerKey;

/// One peer as stored in a generation bucket of a `PeerPool`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub struct PeerRecord {
    pub key: PeerKey,
    pub flags: PeerFlags,
}
