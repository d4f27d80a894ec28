//! Enumerations for store operations.

/// What an upsert did to the pool.
pub mod upsert_outcome;

/// What a reap did to the pool.
pub mod reap_outcome;
