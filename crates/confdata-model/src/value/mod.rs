use std::fmt;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Conversion;

/// Native value produced by converting a validated configuration string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum NativeValue {
    /// Value of an `INT` or `POSINT` entry.
    Integer(i64),
    /// Value of a `FLOAT` or `POSFLOAT` entry. Always finite.
    Float(f64),
    /// Value of a `DATE` entry: midnight of that day at the chosen anchor.
    Instant(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
}

impl NativeValue {
    /// Which conversion produced this value.
    pub const fn conversion(&self) -> Conversion {
        match self {
            NativeValue::Integer(_) => Conversion::Integer,
            NativeValue::Float(_) => Conversion::Float,
            NativeValue::Instant(_) => Conversion::Instant,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NativeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            NativeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<OffsetDateTime> {
        match self {
            NativeValue::Instant(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Integer(v) => write!(f, "{v}"),
            NativeValue::Float(v) => write!(f, "{v}"),
            NativeValue::Instant(v) => match v.format(&Rfc3339) {
                Ok(ts) => f.write_str(&ts),
                Err(_) => f.write_str("<invalid-time>"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn accessors_match_variant() {
        let i = NativeValue::Integer(42);
        assert_eq!(i.as_integer(), Some(42));
        assert_eq!(i.as_float(), None);
        assert_eq!(i.conversion(), Conversion::Integer);

        let f = NativeValue::Float(3.5);
        assert_eq!(f.as_float(), Some(3.5));
        assert_eq!(f.as_instant(), None);

        let t = NativeValue::Instant(datetime!(2024-02-29 0:00 UTC));
        assert_eq!(t.as_instant(), Some(datetime!(2024-02-29 0:00 UTC)));
        assert_eq!(t.conversion(), Conversion::Instant);
    }

    #[test]
    fn display_formats_instant_as_rfc3339() {
        let t = NativeValue::Instant(datetime!(2024-02-29 0:00 +02:00));
        assert_eq!(t.to_string(), "2024-02-29T00:00:00+02:00");
        assert_eq!(NativeValue::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn serde_is_tagged() {
        let json = serde_json::to_string(&NativeValue::Integer(5)).unwrap();
        assert_eq!(json, r#"{"kind":"integer","value":5}"#);

        let t = NativeValue::Instant(datetime!(2021-03-01 0:00 UTC));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"kind":"instant","value":"2021-03-01T00:00:00Z"}"#);

        let back: NativeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
