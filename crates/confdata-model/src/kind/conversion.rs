use std::fmt;

use serde::{Deserialize, Serialize};

/// Native representation a [`crate::DataType`] can be converted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Conversion {
    /// Signed 64-bit integer.
    Integer,
    /// Finite `f64`.
    Float,
    /// Absolute point in time.
    Instant,
}

impl Conversion {
    /// Returns the conversion as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Conversion::Integer => "integer",
            Conversion::Float => "float",
            Conversion::Instant => "instant",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
