use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, UtcOffset};

use crate::convert::offset::local_offset_on;

/// Where midnight of a converted `DATE` is placed on the time line.
///
/// - `Local`: local midnight, at the offset in effect on that date (default).
/// - `Utc`: midnight UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DateAnchor {
    #[default]
    Local,
    Utc,
}

impl DateAnchor {
    /// Offset applied to midnight of `date` for this anchor.
    pub fn offset_on(self, date: Date) -> UtcOffset {
        match self {
            DateAnchor::Local => local_offset_on(date),
            DateAnchor::Utc => UtcOffset::UTC,
        }
    }
}

impl FromStr for DateAnchor {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(DateAnchor::Local),
            "utc" => Ok(DateAnchor::Utc),
            _ => Err(format!("invalid date anchor: {s} (expected: local|utc)")),
        }
    }
}

impl fmt::Display for DateAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateAnchor::Local => "local",
            DateAnchor::Utc => "utc",
        })
    }
}
