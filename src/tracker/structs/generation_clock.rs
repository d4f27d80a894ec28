use std::sync::atomic::AtomicU64;

/// Discrete clock that ages peers: wall-clock seconds divided by a fixed quantum.
///
/// The value is cached and only moves when `refresh` (Reaper tick) or `set`
/// is called, so every reader between two ticks sees the same generation.
/// A manual clock ignores `refresh` and only moves through `set`.
#[derive(Debug)]
pub struct GenerationClock {
    pub(crate) generation: AtomicU64,
    pub(crate) quantum_secs: u64,
    pub(crate) manual: bool,
}
