//! Value validation.
//!
//! [`validate`] decides whether a raw configuration string is a legal instance
//! of a [`DataType`]; [`check`] makes the same decision and says why a value was
//! refused. Neither ever fails: an invalid string is an ordinary result.
//!
//! `FILE`, `EXEC` and `FOLDER` hit the filesystem on every call and may block.
//! A `true` from an earlier call is advisory; re-validate right before use.

mod date;
mod numeric;
mod path;
mod rejection;

pub use path::resolve_executable;
pub use rejection::Rejection;

pub(crate) use date::parse_date;
pub(crate) use numeric::{parse_float, parse_integer, parse_nonnegative_float, parse_nonnegative_integer};

use confdata_model::DataType;

/// Returns `true` if `raw` is a valid value of type `dt`.
#[inline]
pub fn validate(dt: DataType, raw: &str) -> bool {
    check(dt, raw).is_ok()
}

/// Validates `raw` as a value of type `dt`, returning the reason on failure.
pub fn check(dt: DataType, raw: &str) -> Result<(), Rejection> {
    match dt {
        DataType::Str => Ok(()),
        DataType::Int => parse_integer(raw).map(drop),
        DataType::PosInt => parse_nonnegative_integer(raw).map(drop),
        DataType::Float => parse_float(raw).map(drop),
        DataType::PosFloat => parse_nonnegative_float(raw).map(drop),
        DataType::File => path::check_file(raw),
        DataType::Exec => path::check_executable(raw),
        DataType::Folder => path::check_folder(raw),
        DataType::Date => parse_date(raw).map(drop),
    }
}
