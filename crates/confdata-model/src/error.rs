use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown data type: {0:?} (expected one of STR, INT, POSINT, FLOAT, POSFLOAT, FILE, EXEC, FOLDER, DATE)")]
    UnknownType(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
