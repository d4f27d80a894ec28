use crate::tracker::structs::peer_flags::PeerFlags;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::traits::sort_key::SortKey;

impl PeerRecord {
    pub fn new(key: PeerKey, flags: PeerFlags) -> PeerRecord {
        PeerRecord { key, flags }
    }
}

impl SortKey for PeerRecord {
    type Key = PeerKey;

    #[inline(always)]
    fn sort_key(&self) -> &PeerKey {
        &self.key
    }
}
