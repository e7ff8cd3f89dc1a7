//! Outer request parameters: derivation paths, sign payloads, and message
//! encryption requests.
//!
//! These checks run before the transaction builders and hand them an already
//! parsed address path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Nem2Error, Result};
use crate::sign_request::{create_tx, SignRequest};
use crate::validation::{self, Param, ParamType, Record};

pub const HARDENED: u32 = 0x8000_0000;

/// Minimum number of path components accepted for NEM2 keys.
pub const MIN_PATH_LENGTH: usize = 3;

/// Default account path, `m/44'/43'/0'/0'/0'`.
pub const DEFAULT_PATH: &str = "m/44'/43'/0'/0'/0'";

/// Parse a BIP-32 style path such as `m/44'/43'/0'`. A trailing `'` or `h`
/// marks a hardened index.
pub fn parse_path(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    let rest = trimmed
        .strip_prefix("m/")
        .or_else(|| trimmed.strip_prefix("M/"))
        .unwrap_or(trimmed);
    if rest.is_empty() {
        return Err(Nem2Error::invalid("Not a valid path"));
    }

    rest.split('/')
        .map(|component| {
            let (digits, hardened) = match component
                .strip_suffix('\'')
                .or_else(|| component.strip_suffix('h'))
            {
                Some(digits) => (digits, true),
                None => (component, false),
            };
            if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(Nem2Error::invalid(format!(
                    "Not a valid path component: \"{component}\""
                )));
            }
            let index = digits
                .parse::<u32>()
                .ok()
                .filter(|index| *index < HARDENED)
                .ok_or_else(|| {
                    Nem2Error::invalid(format!("Path component out of range: \"{component}\""))
                })?;
            Ok(if hardened { index | HARDENED } else { index })
        })
        .collect()
}

pub fn validate_path(path: &[u32], min_len: usize) -> Result<()> {
    if path.len() < min_len {
        return Err(Nem2Error::invalid(format!(
            "Path is too short: expected at least {min_len} components, got {}",
            path.len()
        )));
    }
    Ok(())
}

/// Accept a path as either a string or an array of indices.
pub fn path_from_value(value: &Value) -> Result<Vec<u32>> {
    let path = match value {
        Value::String(text) => parse_path(text)?,
        Value::Array(items) => items
            .iter()
            .map(|item| validation::int_value::<u32>(item, "path"))
            .collect::<Result<Vec<_>>>()?,
        _ => return Err(Nem2Error::invalid("Parameter \"path\" is not a valid path.")),
    };
    validate_path(&path, MIN_PATH_LENGTH)?;
    Ok(path)
}

fn read_path(payload: &Record) -> Result<Vec<u32>> {
    let value = validation::field(payload, "path")
        .ok_or_else(|| Nem2Error::invalid("Parameter \"path\" is missing."))?;
    path_from_value(value)
}

/// Validated payload of a sign-transaction call.
#[derive(Debug, Clone, PartialEq)]
pub struct SignTransactionParams {
    pub path: Vec<u32>,
    pub generation_hash: String,
    pub transaction: Value,
}

impl SignTransactionParams {
    pub fn from_value(payload: &Value) -> Result<Self> {
        let record = validation::as_record(payload, "payload")?;
        let path = read_path(record)?;
        validation::validate_params(
            record,
            &[
                Param::required("generationHash", ParamType::String),
                Param::required("transaction", ParamType::Object),
            ],
        )?;

        Ok(Self {
            path,
            generation_hash: validation::read_string(record, "generationHash")?,
            transaction: Value::Object(validation::read_record(record, "transaction")?.clone()),
        })
    }

    pub fn into_sign_request(self) -> Result<SignRequest> {
        create_tx(&self.transaction, &self.path, &self.generation_hash)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptMessageRequest {
    pub address_n: Vec<u32>,
    pub recipient_public_key: String,
    pub payload: String,
}

impl EncryptMessageRequest {
    pub fn from_value(payload: &Value) -> Result<Self> {
        let record = validation::as_record(payload, "payload")?;
        validation::validate_params(
            record,
            &[
                Param::required("payload", ParamType::String),
                Param::required("recipientPublicKey", ParamType::String),
            ],
        )?;

        Ok(Self {
            address_n: read_path(record)?,
            recipient_public_key: validation::read_string(record, "recipientPublicKey")?,
            payload: validation::read_string(record, "payload")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptMessageRequest {
    pub address_n: Vec<u32>,
    pub sender_public_key: String,
    pub payload: String,
}

impl DecryptMessageRequest {
    pub fn from_value(payload: &Value) -> Result<Self> {
        let record = validation::as_record(payload, "payload")?;
        validation::validate_params(
            record,
            &[
                Param::required("payload", ParamType::String),
                Param::required("senderPublicKey", ParamType::String),
            ],
        )?;

        Ok(Self {
            address_n: read_path(record)?,
            sender_public_key: validation::read_string(record, "senderPublicKey")?,
            payload: validation::read_string(record, "payload")?,
        })
    }
}
