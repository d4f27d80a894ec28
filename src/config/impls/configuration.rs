use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::workers_config::WorkersConfig;
use crate::tracker::impls::swarm_table::{MAX_SHARD_BITS, MIN_SHARD_BITS};
use crate::tracker::structs::peer_pool::POOLS_COUNT;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            store: StoreConfig {
                shard_bits: 10,
                lock_slots: 64,
                generation_secs: 300,
                torrent_idle_generations: 288,
                max_peers_returned: 200,
            },
            workers: WorkersConfig {
                full_scrape_threads: 1,
                stats_threads: 1,
                reap_threads: 1,
                reaper_interval: 60,
                scan_chunk_size: 65536,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: "".to_string(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config<P: AsRef<Path>>(config: &Configuration, path: P) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. When the file is missing or corrupt and
    /// `create` is set, a default file is written and an error is still
    /// returned so the operator can edit it before starting.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path.display());
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path.display());
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("{error}");
            return Err(error.into());
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let store = &self.store;
        let workers = &self.workers;
        if !(MIN_SHARD_BITS..=MAX_SHARD_BITS).contains(&store.shard_bits) {
            return Err(ConfigurationError::ValidationError(format!(
                "store.shard_bits must be between {MIN_SHARD_BITS} and {MAX_SHARD_BITS}, got {}", store.shard_bits
            )));
        }
        let checks = [
            ("log_console_interval", self.log_console_interval),
            ("store.lock_slots", store.lock_slots as u64),
            ("store.generation_secs", store.generation_secs),
            ("store.max_peers_returned", store.max_peers_returned as u64),
            ("workers.reaper_interval", workers.reaper_interval),
            ("workers.scan_chunk_size", workers.scan_chunk_size as u64),
            ("workers.full_scrape_threads", workers.full_scrape_threads as u64),
            ("workers.stats_threads", workers.stats_threads as u64),
            ("workers.reap_threads", workers.reap_threads as u64),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than zero")));
            }
        }
        if store.torrent_idle_generations < POOLS_COUNT as u64 {
            return Err(ConfigurationError::ValidationError(format!(
                "store.torrent_idle_generations must be at least {POOLS_COUNT}, got {}", store.torrent_idle_generations
            )));
        }
        Ok(())
    }
}
