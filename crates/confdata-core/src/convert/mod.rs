//! Value conversion.
//!
//! Every conversion requires that the raw string validates for its data type.
//! The converters re-check that themselves and refuse with
//! [`ConvertError::PreconditionViolated`] instead of guessing a value; asking an
//! integer from a `FLOAT` (or similar) is a [`ConvertError::TypeMismatch`].
//! The type check comes first.

mod anchor;
pub use anchor::DateAnchor;

mod offset;
pub use offset::local_offset_on;

use time::OffsetDateTime;
use tracing::error;

use confdata_model::{Conversion, DataType, NativeValue};

use crate::error::ConvertError;
use crate::validate::{
    Rejection, parse_date, parse_float, parse_integer, parse_nonnegative_float,
    parse_nonnegative_integer,
};

/// Converts an `INT`/`POSINT` value into an `i64`.
pub fn to_integer(dt: DataType, raw: &str) -> Result<i64, ConvertError> {
    let parsed = match dt {
        DataType::Int => parse_integer(raw),
        DataType::PosInt => parse_nonnegative_integer(raw),
        other => return Err(mismatch(Conversion::Integer, other)),
    };
    parsed.map_err(|rejection| violated(dt, raw, rejection))
}

/// Converts a `FLOAT`/`POSFLOAT` value into a finite `f64`.
pub fn to_float(dt: DataType, raw: &str) -> Result<f64, ConvertError> {
    let parsed = match dt {
        DataType::Float => parse_float(raw),
        DataType::PosFloat => parse_nonnegative_float(raw),
        other => return Err(mismatch(Conversion::Float, other)),
    };
    parsed.map_err(|rejection| violated(dt, raw, rejection))
}

/// Converts a `DATE` value into local midnight of that day.
///
/// The offset is the one in effect on that day, see [`local_offset_on`].
pub fn to_instant(dt: DataType, raw: &str) -> Result<OffsetDateTime, ConvertError> {
    to_instant_at(dt, raw, DateAnchor::Local)
}

/// Converts a `DATE` value into midnight of that day at the given anchor.
pub fn to_instant_at(
    dt: DataType,
    raw: &str,
    anchor: DateAnchor,
) -> Result<OffsetDateTime, ConvertError> {
    if dt != DataType::Date {
        return Err(mismatch(Conversion::Instant, dt));
    }
    let date = parse_date(raw).map_err(|rejection| violated(dt, raw, rejection))?;
    Ok(date.midnight().assume_offset(anchor.offset_on(date)))
}

/// Converts a value with whichever conversion its type supports.
///
/// Types without a native form (`STR`, `FILE`, `EXEC`, `FOLDER`) yield
/// [`ConvertError::NoConversion`].
pub fn convert(dt: DataType, raw: &str) -> Result<NativeValue, ConvertError> {
    convert_at(dt, raw, DateAnchor::Local)
}

/// Like [`convert`], with an explicit anchor for dates.
pub fn convert_at(dt: DataType, raw: &str, anchor: DateAnchor) -> Result<NativeValue, ConvertError> {
    match dt.conversion() {
        Some(Conversion::Integer) => to_integer(dt, raw).map(NativeValue::Integer),
        Some(Conversion::Float) => to_float(dt, raw).map(NativeValue::Float),
        Some(Conversion::Instant) => to_instant_at(dt, raw, anchor).map(NativeValue::Instant),
        None => {
            error!(data_type = %dt, "conversion requested for a type without native form");
            Err(ConvertError::NoConversion(dt))
        }
    }
}

fn mismatch(expected: Conversion, actual: DataType) -> ConvertError {
    error!(%expected, data_type = %actual, "conversion requested for mismatched type");
    ConvertError::TypeMismatch { expected, actual }
}

fn violated(data_type: DataType, raw: &str, rejection: Rejection) -> ConvertError {
    error!(%data_type, raw, %rejection, "conversion requested for unvalidated value");
    ConvertError::PreconditionViolated {
        data_type,
        raw: raw.to_string(),
        rejection,
    }
}
