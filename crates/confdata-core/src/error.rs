use thiserror::Error;

use confdata_model::{Conversion, DataType, ModelError};

use crate::validate::Rejection;

/// Contract violations raised by the converter.
///
/// These are programming errors: the caller asked for a conversion it should
/// never have asked for. They are not a way to report bad user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("type mismatch: {expected} conversion requested for {actual} value")]
    TypeMismatch {
        expected: Conversion,
        actual: DataType,
    },

    #[error("precondition violated: {raw:?} is not a valid {data_type} value ({rejection})")]
    PreconditionViolated {
        data_type: DataType,
        raw: String,
        rejection: Rejection,
    },

    #[error("no native conversion exists for {0} values")]
    NoConversion(DataType),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("invalid {data_type} value {raw:?}: {rejection}")]
    Invalid {
        data_type: DataType,
        raw: String,
        rejection: Rejection,
    },

    #[error("validation worker failed: {0}")]
    Join(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
