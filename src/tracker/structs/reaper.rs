use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use parking_lot::{Condvar, Mutex};
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Timer thread that refreshes the generation clock and sweeps every shard.
#[derive(Debug)]
pub struct Reaper {
    pub(crate) tracker: Arc<TorrentTracker>,
    pub(crate) interval: Duration,
    pub(crate) stop: Arc<(Mutex<bool>, Condvar)>,
    pub(crate) handle: Mutex<Option<JoinHandle<()>>>,
}
