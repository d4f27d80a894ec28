//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the store configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **store**: Sharding, lock list, generation quantum and idle limits
//! - **workers**: Background scan workers and the Reaper timer
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating it when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
