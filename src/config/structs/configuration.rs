use serde::{Deserialize, Serialize};
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::workers_config::WorkersConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub store: StoreConfig,
    pub workers: WorkersConfig,
    pub sentry_config: SentryConfig,
}
