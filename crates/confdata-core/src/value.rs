use serde::Serialize;

use confdata_model::{DataType, NativeValue};

use crate::convert::{DateAnchor, convert_at};
use crate::error::{CoreError, CoreResult};
use crate::validate::check;

/// A configuration value that passed validation for its data type.
///
/// The raw string is authoritative. The native value is only present after
/// [`TypedValue::converted`] and is always derived from the raw string.
/// Instances are never mutated: re-validating or converting returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedValue {
    data_type: DataType,
    raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    native: Option<NativeValue>,
}

impl TypedValue {
    /// Validates `raw` as a `data_type` value.
    pub fn validated(data_type: DataType, raw: impl Into<String>) -> CoreResult<Self> {
        let raw = raw.into();
        match check(data_type, &raw) {
            Ok(()) => Ok(Self {
                data_type,
                raw,
                native: None,
            }),
            Err(rejection) => Err(CoreError::Invalid {
                data_type,
                raw,
                rejection,
            }),
        }
    }

    /// Resolves `type_name` through the registry, then validates `raw`.
    pub fn parse(type_name: &str, raw: impl Into<String>) -> CoreResult<Self> {
        let data_type = type_name.parse::<DataType>()?;
        Self::validated(data_type, raw)
    }

    /// Data type the value was validated against.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The raw configuration string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Native value, if the value has been converted.
    pub fn native(&self) -> Option<&NativeValue> {
        self.native.as_ref()
    }

    /// Consumes the value and returns the raw string.
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Returns a copy carrying the native value, dates anchored at local midnight.
    pub fn converted(&self) -> CoreResult<Self> {
        self.converted_at(DateAnchor::Local)
    }

    /// Returns a copy carrying the native value, dates anchored at `anchor`.
    pub fn converted_at(&self, anchor: DateAnchor) -> CoreResult<Self> {
        let native = convert_at(self.data_type, &self.raw, anchor)?;
        Ok(Self {
            data_type: self.data_type,
            raw: self.raw.clone(),
            native: Some(native),
        })
    }

    /// Validates the raw string again.
    ///
    /// Filesystem-backed values can stop being valid at any time; call this right
    /// before handing a path on.
    pub fn revalidated(&self) -> CoreResult<Self> {
        Self::validated(self.data_type, self.raw.clone())
    }
}
