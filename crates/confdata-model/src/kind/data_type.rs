use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};
use crate::kind::Conversion;

/// Declared type of a configuration value.
///
/// The set is closed: every configuration value carries exactly one tag,
/// and the tag decides which validation and conversion rules apply.
///
/// Each variant has a canonical name exchanged with configuration ingestion:
/// - `Str`      — `STR`, any string.
/// - `Int`      — `INT`, signed decimal integer.
/// - `PosInt`   — `POSINT`, integer `>= 0`.
/// - `Float`    — `FLOAT`, decimal or scientific literal.
/// - `PosFloat` — `POSFLOAT`, float `>= 0`.
/// - `File`     — `FILE`, existing readable regular file.
/// - `Exec`     — `EXEC`, existing regular file with execute permission.
/// - `Folder`   — `FOLDER`, existing directory.
/// - `Date`     — `DATE`, real calendar date.
///
/// Names are matched exactly (case-sensitive, no trimming). Adding a variant is a
/// breaking change for every caller that enumerates [`DataType::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    Str,
    Int,
    PosInt,
    Float,
    PosFloat,
    File,
    Exec,
    Folder,
    Date,
}

impl DataType {
    /// All data types in declaration order.
    pub const ALL: [DataType; 9] = [
        DataType::Str,
        DataType::Int,
        DataType::PosInt,
        DataType::Float,
        DataType::PosFloat,
        DataType::File,
        DataType::Exec,
        DataType::Folder,
        DataType::Date,
    ];

    /// Returns the canonical name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            DataType::Str => "STR",
            DataType::Int => "INT",
            DataType::PosInt => "POSINT",
            DataType::Float => "FLOAT",
            DataType::PosFloat => "POSFLOAT",
            DataType::File => "FILE",
            DataType::Exec => "EXEC",
            DataType::Folder => "FOLDER",
            DataType::Date => "DATE",
        }
    }

    /// Returns `true` if `name` is one of the canonical type names.
    pub fn is_type_name(name: &str) -> bool {
        name.parse::<DataType>().is_ok()
    }

    /// Returns `true` for the integer and float types.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            DataType::Int | DataType::PosInt | DataType::Float | DataType::PosFloat
        )
    }

    /// Returns `true` for the types backed by a filesystem check.
    pub const fn is_path(self) -> bool {
        matches!(self, DataType::File | DataType::Exec | DataType::Folder)
    }

    /// Returns `true` if the type rejects negative values.
    pub const fn is_nonnegative(self) -> bool {
        matches!(self, DataType::PosInt | DataType::PosFloat)
    }

    /// Native conversion supported by this type, if any.
    ///
    /// Strings and paths have none: callers use the raw string directly.
    pub const fn conversion(self) -> Option<Conversion> {
        match self {
            DataType::Int | DataType::PosInt => Some(Conversion::Integer),
            DataType::Float | DataType::PosFloat => Some(Conversion::Float),
            DataType::Date => Some(Conversion::Instant),
            DataType::Str | DataType::File | DataType::Exec | DataType::Folder => None,
        }
    }
}

impl FromStr for DataType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "STR" => Ok(DataType::Str),
            "INT" => Ok(DataType::Int),
            "POSINT" => Ok(DataType::PosInt),
            "FLOAT" => Ok(DataType::Float),
            "POSFLOAT" => Ok(DataType::PosFloat),
            "FILE" => Ok(DataType::File),
            "EXEC" => Ok(DataType::Exec),
            "FOLDER" => Ok(DataType::Folder),
            "DATE" => Ok(DataType::Date),
            other => Err(ModelError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
