use std::fmt;
use std::fmt::Formatter;
use std::time::{Duration, SystemTime};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    write!(f, "{}", std::str::from_utf8(&chars).map_err(|_| fmt::Error)?)
}

/// Value of a single ASCII hex digit, or `0xFF` when the byte is not one.
#[inline(always)]
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level.as_str())));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}

/// Seconds since the Unix epoch. A clock set before 1970 reads as zero.
pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sleeps for `timeout`, returning `true` when shutdown was signalled first.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool
{
    tokio::select! {
        _ = shutdown_handler.handle() => {
            true
        }
        _ = tokio::time::sleep(timeout) => {
            false
        }
    }
}
