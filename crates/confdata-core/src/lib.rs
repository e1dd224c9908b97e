//! Validation and conversion of typed configuration values.
//!
//! Configuration ingestion hands over `(type name, raw string)` pairs. This crate
//! resolves the type name (via [`confdata_model::DataType`]), decides whether
//! the string is a legal value of that type, and converts numbers and dates into
//! native values for the code that builds jobs from the configuration.
//!
//! ```
//! use confdata_core::{DataType, to_integer, validate};
//!
//! let dt: DataType = "POSINT".parse().unwrap();
//! assert!(validate(dt, "12"));
//! assert_eq!(to_integer(dt, "12").unwrap(), 12);
//! assert!(!validate(dt, "-12"));
//! ```
pub mod batch;
pub mod convert;
pub mod error;
pub mod validate;

mod value;
pub use value::TypedValue;

pub use confdata_model::{Conversion, DataType, ModelError, NativeValue};

pub use batch::{BatchConfig, ValidationOutcome, ValidationRequest, validate_all_blocking, validate_batch};
pub use convert::{
    DateAnchor, convert, convert_at, local_offset_on, to_float, to_instant, to_instant_at,
    to_integer,
};
pub use error::{ConvertError, CoreError, CoreResult};
pub use validate::{Rejection, check, resolve_executable, validate};
