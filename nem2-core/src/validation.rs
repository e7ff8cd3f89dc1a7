//! Field validation for externally supplied transaction records.
//!
//! Incoming transactions arrive as loosely typed JSON objects. Every builder
//! first runs [`validate_params`] over the fields it needs and only then reads
//! them through the typed helpers below, so a malformed record is rejected
//! before any output is assembled.

use serde_json::{Map, Value};

use crate::error::{Nem2Error, Result};
use crate::types::Uint64;

/// A JSON object as received from the caller.
pub type Record = Map<String, Value>;

/// Runtime JSON kind expected for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    String,
    Object,
    Array,
    Boolean,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::String => "string",
            ParamType::Object => "object",
            ParamType::Array => "array",
            ParamType::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::Number => value.is_number(),
            ParamType::String => value.is_string(),
            ParamType::Object => value.is_object(),
            ParamType::Array => value.is_array(),
            ParamType::Boolean => value.is_boolean(),
        }
    }
}

/// One `{name, type, obligatory}` constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamType,
    pub obligatory: bool,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamType) -> Self {
        Self {
            name,
            kind,
            obligatory: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamType) -> Self {
        Self {
            name,
            kind,
            obligatory: false,
        }
    }
}

/// Returns the field value, treating JSON `null` the same as an absent key.
pub fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    record.get(name).filter(|value| !value.is_null())
}

/// Check every constraint in order and fail on the first violation.
pub fn validate_params(record: &Record, params: &[Param]) -> Result<()> {
    for param in params {
        match field(record, param.name) {
            None if param.obligatory => {
                return Err(Nem2Error::invalid(format!(
                    "Parameter \"{}\" is missing.",
                    param.name
                )));
            }
            None => {}
            Some(value) if !param.kind.matches(value) => {
                return Err(Nem2Error::invalid(format!(
                    "Parameter \"{}\" has invalid type. \"{}\" expected.",
                    param.name,
                    param.kind.as_str()
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// View a value as a record, naming it in the error when it is not an object.
pub fn as_record<'a>(value: &'a Value, name: &str) -> Result<&'a Record> {
    value.as_object().ok_or_else(|| {
        Nem2Error::invalid(format!(
            "Parameter \"{name}\" has invalid type. \"object\" expected."
        ))
    })
}

fn require<'a>(record: &'a Record, name: &str) -> Result<&'a Value> {
    field(record, name)
        .ok_or_else(|| Nem2Error::invalid(format!("Parameter \"{name}\" is missing.")))
}

pub fn read_string(record: &Record, name: &str) -> Result<String> {
    require(record, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            Nem2Error::invalid(format!(
                "Parameter \"{name}\" has invalid type. \"string\" expected."
            ))
        })
}

pub fn read_optional_string(record: &Record, name: &str) -> Result<Option<String>> {
    match field(record, name) {
        None => Ok(None),
        Some(_) => read_string(record, name).map(Some),
    }
}

/// Convert a JSON number into a fixed-width integer, rejecting fractions and overflow.
pub fn int_value<T: TryFrom<i64>>(value: &Value, name: &str) -> Result<T> {
    let number = value.as_i64().ok_or_else(|| {
        Nem2Error::invalid(format!("Parameter \"{name}\" must be an integer."))
    })?;
    T::try_from(number)
        .map_err(|_| Nem2Error::invalid(format!("Parameter \"{name}\" is out of range.")))
}

pub fn read_int<T: TryFrom<i64>>(record: &Record, name: &str) -> Result<T> {
    int_value(require(record, name)?, name)
}

/// Read a small enum code. Out-of-range integers report the same `message` as
/// unknown values.
pub fn read_enum<T: TryFrom<u8, Error = Nem2Error>>(
    record: &Record,
    name: &str,
    message: &'static str,
) -> Result<T> {
    let raw: i64 = read_int(record, name)?;
    let byte = u8::try_from(raw).map_err(|_| Nem2Error::invalid(message))?;
    T::try_from(byte)
}

/// Read the `type` code. Integers that do not fit a `u16` cannot name a
/// registered type, so they fail as unknown types rather than bad fields.
pub fn read_type_code(record: &Record) -> Result<u16> {
    let raw: i64 = read_int(record, "type")?;
    u16::try_from(raw).map_err(|_| Nem2Error::UnknownTransactionType(raw))
}

pub fn read_uint64(record: &Record, name: &str) -> Result<Uint64> {
    let raw = read_string(record, name)?;
    Uint64::new(raw).map_err(|_| {
        Nem2Error::invalid(format!(
            "Parameter \"{name}\" must be an unsigned 64-bit decimal string."
        ))
    })
}

pub fn read_optional_uint64(record: &Record, name: &str) -> Result<Option<Uint64>> {
    match field(record, name) {
        None => Ok(None),
        Some(_) => read_uint64(record, name).map(Some),
    }
}

pub fn read_array<'a>(record: &'a Record, name: &str) -> Result<&'a Vec<Value>> {
    require(record, name)?.as_array().ok_or_else(|| {
        Nem2Error::invalid(format!(
            "Parameter \"{name}\" has invalid type. \"array\" expected."
        ))
    })
}

pub fn read_record<'a>(record: &'a Record, name: &str) -> Result<&'a Record> {
    as_record(require(record, name)?, name)
}
