use serde::Serialize;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::swarm_metadata::SwarmMetadata;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnounceReply {
    pub metadata: SwarmMetadata,
    pub peers: Vec<PeerRecord>,
}
