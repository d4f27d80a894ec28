use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Allocation failed while growing a sorted vector")]
    OutOfMemory,

    #[error("Lock list full: shard {shard} could not be locked, {capacity} slots in use")]
    LockCapacityExceeded { shard: usize, capacity: usize },

    #[error("Shard {0} unlocked while not held")]
    LockNotHeld(usize),

    #[error("Shard {shard} does not exist, the table has {count} shards")]
    ShardOutOfRange { shard: usize, count: usize },

    #[error("Store is shutting down")]
    ShuttingDown,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::collections::TryReserveError> for StoreError {
    fn from(_: std::collections::TryReserveError) -> Self {
        StoreError::OutOfMemory
    }
}
