use serde::Serialize;

/// Scrape view of one swarm.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize)]
pub struct SwarmMetadata {
    /// Live peers with the SEEDING flag.
    pub seeds: u64,
    /// All live peers, seeders included.
    pub peers: u64,
    /// Peers that ever reported COMPLETED.
    pub downloads: u64,
}
