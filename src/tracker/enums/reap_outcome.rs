/// Result of aging one pool to the current generation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ReapOutcome {
    /// The pool was already normalized at this generation.
    Current,
    /// The ring advanced; `peers` and `seeds` records fell off.
    Aged { peers: usize, seeds: usize },
    /// No live peers left, kept for its download count.
    Retained,
    /// Idle or empty without scrape value; the swarm must be dropped.
    Exhausted,
}
