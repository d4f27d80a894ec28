use serde::{Deserialize, Serialize};

/// Error reporting. Lock-list violations and deadlocks are sent here when enabled.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub debug: bool,
    /// Fraction of error events sent, 0.0 to 1.0.
    pub sample_rate: f32,
    pub max_breadcrumbs: usize,
    pub attach_stacktrace: bool,
    pub send_default_pii: bool,
    pub traces_sample_rate: f32,
}
