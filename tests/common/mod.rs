#![allow(dead_code)]
use rand::RngExt;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tempfile::TempDir;
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::tracker::structs::generation_clock::GenerationClock;
use torrust_swarm::tracker::structs::info_hash::InfoHash;
use torrust_swarm::tracker::structs::peer_key::PeerKey;
use torrust_swarm::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub const START_GENERATION: u64 = 100;

pub fn create_test_config() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.store.shard_bits = 4;
    config.store.lock_slots = 32;
    config.workers.scan_chunk_size = 256;
    config
}

/// Tracker on a manual clock at `START_GENERATION`.
pub fn create_test_tracker() -> TestTracker {
    create_test_tracker_with(create_test_config())
}

pub fn create_test_tracker_with(config: Configuration) -> TestTracker {
    Arc::new(TorrentTracker::with_clock(
        Arc::new(config),
        GenerationClock::manual(300, START_GENERATION),
    ))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

/// Info hash whose first byte (and so its shard) is fixed.
pub fn info_hash_with_first_byte(first: u8, fill: u8) -> InfoHash {
    let mut bytes = [fill; 20];
    bytes[0] = first;
    InfoHash(bytes)
}

pub fn peer(a: u8, b: u8, c: u8, d: u8, port: u16) -> PeerKey {
    PeerKey::new(Ipv4Addr::new(a, b, c, d), port)
}

pub fn numbered_peer(n: u16) -> PeerKey {
    PeerKey::new(Ipv4Addr::new(10, 1, (n >> 8) as u8, n as u8), 6881)
}
