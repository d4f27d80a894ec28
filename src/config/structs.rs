//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Swarm store settings (shards, lock slots, generations).
pub mod store_config;

/// Background worker and Reaper settings.
pub mod workers_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
