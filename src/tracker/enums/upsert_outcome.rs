/// What an insert into a `PeerPool` did to the peer.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum UpsertOutcome {
    /// First sighting, the record is new.
    Inserted,
    /// Already in the current generation, flags were refreshed in place.
    Refreshed,
    /// Found in an older generation and moved to the current one.
    Promoted,
}
