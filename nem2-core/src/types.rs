//! Shared value types used across headers and transaction bodies.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::validation::{self, Param, ParamType, Record};

/// Network identifiers carried in transaction headers and addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum NetworkType {
    MainNet = 0x68,
    TestNet = 0x98,
    Mijin = 0x60,
    MijinTest = 0x90,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::MainNet => "mainnet",
            NetworkType::TestNet => "testnet",
            NetworkType::Mijin => "mijin",
            NetworkType::MijinTest => "mijin-test",
        }
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x68 => Ok(NetworkType::MainNet),
            0x98 => Ok(NetworkType::TestNet),
            0x60 => Ok(NetworkType::Mijin),
            0x90 => Ok(NetworkType::MijinTest),
            other => Err(Nem2Error::invalid(format!("Invalid Network Type: {other}"))),
        }
    }
}

impl From<NetworkType> for u8 {
    fn from(value: NetworkType) -> Self {
        value as u8
    }
}

/// An unsigned 64-bit quantity carried as a decimal string so no precision is lost in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uint64(String);

impl Uint64 {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if parse_u64_digits(&value).is_some() {
            Ok(Self(value))
        } else {
            Err(Nem2Error::invalid(format!(
                "\"{value}\" is not an unsigned 64-bit decimal string"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u64 {
        // Checked on construction.
        parse_u64_digits(&self.0).unwrap_or_default()
    }
}

impl TryFrom<String> for Uint64 {
    type Error = Nem2Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Uint64> for String {
    fn from(value: Uint64) -> Self {
        value.0
    }
}

impl Display for Uint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_u64_digits(input: &str) -> Option<u64> {
    if input.is_empty() || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    input.parse::<u64>().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mosaic {
    pub id: String,
    pub amount: Uint64,
}

impl Mosaic {
    pub fn from_record(record: &Record) -> Result<Self> {
        validation::validate_params(
            record,
            &[
                Param::required("id", ParamType::String),
                Param::required("amount", ParamType::String),
            ],
        )?;

        Ok(Self {
            id: validation::read_string(record, "id")?,
            amount: validation::read_uint64(record, "amount")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub network_type: NetworkType,
}

impl Address {
    pub fn from_record(record: &Record) -> Result<Self> {
        validation::validate_params(
            record,
            &[
                Param::required("address", ParamType::String),
                Param::required("networkType", ParamType::Number),
            ],
        )?;

        Ok(Self {
            address: validation::read_string(record, "address")?,
            network_type: NetworkType::try_from(validation::read_int::<u8>(
                record,
                "networkType",
            )?)?,
        })
    }

    /// Read a nested address object stored under `name`.
    pub fn read(record: &Record, name: &str) -> Result<Self> {
        Self::from_record(validation::read_record(record, name)?)
    }
}

/// Message attached to a transfer; the payload is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub payload: String,
    #[serde(rename = "type")]
    pub message_type: u8,
}

impl Message {
    pub fn from_record(record: &Record) -> Result<Self> {
        validation::validate_params(
            record,
            &[
                Param::required("payload", ParamType::String),
                Param::required("type", ParamType::Number),
            ],
        )?;

        Ok(Self {
            payload: validation::read_string(record, "payload")?,
            message_type: validation::read_int(record, "type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosignature {
    pub signature: String,
    pub public_key: String,
}

impl Cosignature {
    pub fn from_record(record: &Record) -> Result<Self> {
        validation::validate_params(
            record,
            &[
                Param::required("signature", ParamType::String),
                Param::required("publicKey", ParamType::String),
            ],
        )?;

        Ok(Self {
            signature: validation::read_string(record, "signature")?,
            public_key: validation::read_string(record, "publicKey")?,
        })
    }
}
