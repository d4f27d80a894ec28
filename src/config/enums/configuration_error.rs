/// Why a configuration file could not be read, written or accepted.
#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    /// Parsed fine but holds a value the store cannot run with.
    ValidationError(String),
}
