mod config;
mod error;
mod install;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Logs go to stderr so that reports written to stdout stay machine-readable.
///
/// With `LoggerTimeZone::Local`, call [`init_local_offset`] in
/// `main()` before spawning threads, otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use confdata_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger must initialize once");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::text(cfg),
        LoggerFormat::Json => install::json(cfg),
    }
}
