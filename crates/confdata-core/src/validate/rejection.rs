use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a raw string failed validation for its data type.
///
/// A rejection is an ordinary value: the library never logs it and never
/// raises it on the validation path. Callers decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    #[error("not an integer literal")]
    NotAnInteger,

    #[error("integer does not fit in 64 bits")]
    OutOfRange,

    #[error("value must not be negative")]
    Negative,

    #[error("not a decimal or scientific float literal")]
    NotAFloat,

    #[error("float literal is not finite")]
    NotFinite,

    #[error("path does not exist")]
    Missing,

    #[error("path is not a regular file")]
    NotARegularFile,

    #[error("file is not readable by this process")]
    NotReadable,

    #[error("file is not executable by this process")]
    NotExecutable,

    #[error("path is not a directory")]
    NotADirectory,

    #[error("not a date (expected YYYY-MM-DD or DD/MM/YYYY)")]
    NotADate,

    #[error("no such calendar date")]
    NoSuchDate,
}
