use std::ops::{BitOr, BitOrAssign};
use crate::tracker::structs::peer_flags::PeerFlags;

impl PeerFlags {
    pub const NONE: PeerFlags = PeerFlags(0x00);
    pub const SEEDING: PeerFlags = PeerFlags(0x80);
    pub const COMPLETED: PeerFlags = PeerFlags(0x40);
    pub const STOPPED: PeerFlags = PeerFlags(0x20);

    #[inline(always)]
    pub fn contains(&self, other: PeerFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub fn is_seeding(&self) -> bool {
        self.contains(PeerFlags::SEEDING)
    }

    #[inline(always)]
    pub fn is_completed(&self) -> bool {
        self.contains(PeerFlags::COMPLETED)
    }

    #[inline(always)]
    pub fn is_stopped(&self) -> bool {
        self.contains(PeerFlags::STOPPED)
    }

    pub fn insert(&mut self, other: PeerFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: PeerFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for PeerFlags {
    type Output = PeerFlags;

    fn bitor(self, rhs: PeerFlags) -> PeerFlags {
        PeerFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PeerFlags {
    fn bitor_assign(&mut self, rhs: PeerFlags) {
        self.0 |= rhs.0;
    }
}
