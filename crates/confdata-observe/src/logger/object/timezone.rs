use std::{
    fmt,
    str::FromStr,
    sync::{OnceLock, RwLock},
};

use serde::{Deserialize, Serialize};
use time::UtcOffset;
use tracing::debug;

use crate::logger::LoggerError;

/// Local offset used for `LoggerTimeZone::Local` timestamps.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Set once the first detection attempt has run.
static DETECTED: OnceLock<()> = OnceLock::new();

/// Timezone of log timestamps.
///
/// `Local` reads the offset cached by [`init_local_offset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    Local,
}

impl LoggerTimeZone {
    pub(crate) fn offset(self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => local_offset(),
        }
    }
}

/// Detects and caches the local UTC offset for log timestamps.
///
/// Detection only succeeds while the process is single-threaded on most Unix
/// platforms: call this from `main()` before starting a runtime. On failure the
/// cache keeps UTC.
///
/// # Example
/// ```no_run
/// fn main() {
///     confdata_observe::init_local_offset();
///     // start the runtime afterwards
/// }
/// ```
pub fn init_local_offset() {
    match UtcOffset::current_local_offset() {
        Ok(offset) => {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = offset;
            }
            let _ = DETECTED.set(());
        }
        Err(_) => debug!("local offset detection failed, log timestamps stay in UTC"),
    }
}

/// Cached local offset, detected lazily if [`init_local_offset`] never ran.
fn local_offset() -> UtcOffset {
    DETECTED.get_or_init(|| {
        if let Ok(detected) = UtcOffset::current_local_offset() {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = detected;
            }
        }
    });
    LOCAL_OFFSET.read().map(|guard| *guard).unwrap_or(UtcOffset::UTC)
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}
