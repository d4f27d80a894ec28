//! Statistics enumerations.

/// Counter selector used by `update_stats` and `set_stats`.
pub mod stats_event;
