//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the crate.
//!
//! # Utilities
//!
//! - Hex encoding/decoding
//! - Logging setup
//! - Timestamp utilities
//! - Graceful shutdown handling
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::common::common::current_time;
//!
//! // Get current timestamp
//! let now = current_time();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
