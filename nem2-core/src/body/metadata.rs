//! Account, mosaic, and namespace metadata bodies.
//!
//! All three share one shape; only the target differs. Account metadata has no
//! target id, the other two carry the mosaic or namespace id in `target_id`.
//!
//! `value` is passed through as text; its size is its UTF-8 byte length and
//! must equal the declared `valueSize`.

use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::validation::{self, Param, ParamType, Record};

/// Largest metadata value accepted, in bytes. Applies to both the declared
/// `valueSize` and the measured `value`.
pub const MAX_METADATA_VALUE_SIZE: u16 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub target_public_key: String,
    pub scoped_metadata_key: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_id: Option<String>,
    pub value_size_delta: i16,
    pub value_size: u16,
    pub value: String,
}

const METADATA_PARAMS: [Param; 5] = [
    Param::required("targetPublicKey", ParamType::String),
    Param::required("scopedMetadataKey", ParamType::String),
    Param::required("valueSizeDelta", ParamType::Number),
    Param::required("valueSize", ParamType::Number),
    Param::required("value", ParamType::String),
];

fn metadata(tx: &Record, target_field: Option<&'static str>) -> Result<Metadata> {
    validation::validate_params(tx, &METADATA_PARAMS)?;
    if let Some(name) = target_field {
        validation::validate_params(tx, &[Param::required(name, ParamType::String)])?;
    }

    let value_size: i64 = validation::read_int(tx, "valueSize")?;
    if !(0..=i64::from(MAX_METADATA_VALUE_SIZE)).contains(&value_size) {
        return Err(Nem2Error::invalid(format!(
            "Invalid valueSize: {value_size} (max {MAX_METADATA_VALUE_SIZE} bytes)"
        )));
    }

    let value = validation::read_string(tx, "value")?;
    if value.len() > usize::from(MAX_METADATA_VALUE_SIZE) {
        return Err(Nem2Error::invalid(format!(
            "Invalid value: {} bytes (max {MAX_METADATA_VALUE_SIZE} bytes)",
            value.len()
        )));
    }
    let value_size = u16::try_from(value_size)
        .map_err(|_| Nem2Error::invalid("Invalid valueSize"))?;
    if value.len() != usize::from(value_size) {
        return Err(Nem2Error::invalid(format!(
            "Invalid valueSize: {value_size} does not match value length {}",
            value.len()
        )));
    }

    Ok(Metadata {
        target_public_key: validation::read_string(tx, "targetPublicKey")?,
        scoped_metadata_key: validation::read_string(tx, "scopedMetadataKey")?,
        target_id: target_field
            .map(|name| validation::read_string(tx, name))
            .transpose()?,
        value_size_delta: validation::read_int(tx, "valueSizeDelta")?,
        value_size,
        value,
    })
}

pub fn account_metadata(tx: &Record) -> Result<Metadata> {
    metadata(tx, None)
}

pub fn mosaic_metadata(tx: &Record) -> Result<Metadata> {
    metadata(tx, Some("targetMosaicId"))
}

pub fn namespace_metadata(tx: &Record) -> Result<Metadata> {
    metadata(tx, Some("targetNamespaceId"))
}
