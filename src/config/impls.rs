/// Configuration defaults, loading, saving and validation.
pub mod configuration;

/// Display and Error for ConfigurationError.
pub mod configuration_error;
