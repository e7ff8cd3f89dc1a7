//! Secret lock, secret proof, and hash lock bodies.

use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::types::{Address, Mosaic, Uint64};
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HashAlgorithm {
    Sha3_256 = 0,
    Keccak256 = 1,
    Hash160 = 2,
    Hash256 = 3,
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(HashAlgorithm::Sha3_256),
            1 => Ok(HashAlgorithm::Keccak256),
            2 => Ok(HashAlgorithm::Hash160),
            3 => Ok(HashAlgorithm::Hash256),
            _ => Err(Nem2Error::invalid("Invalid Hash Algorithm")),
        }
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(value: HashAlgorithm) -> Self {
        value as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretLock {
    pub secret: String,
    pub mosaic: Mosaic,
    pub duration: Uint64,
    pub hash_algorithm: HashAlgorithm,
    pub recipient_address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretProof {
    pub hash_algorithm: HashAlgorithm,
    pub secret: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_address: Option<Address>,
    pub proof: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLock {
    pub mosaic: Mosaic,
    pub duration: Uint64,
    pub hash: String,
}

// Locks take the mosaic as two flat fields rather than a nested object.
fn locked_mosaic(tx: &Record) -> Result<Mosaic> {
    Ok(Mosaic {
        id: validation::read_string(tx, "mosaicId")?,
        amount: validation::read_uint64(tx, "amount")?,
    })
}

pub fn secret_lock(tx: &Record) -> Result<SecretLock> {
    validation::validate_params(
        tx,
        &[
            Param::required("mosaicId", ParamType::String),
            Param::required("amount", ParamType::String),
            Param::required("duration", ParamType::String),
            Param::required("hashAlgorithm", ParamType::Number),
            Param::required("secret", ParamType::String),
            Param::required("recipientAddress", ParamType::Object),
        ],
    )?;

    Ok(SecretLock {
        secret: validation::read_string(tx, "secret")?,
        mosaic: locked_mosaic(tx)?,
        duration: validation::read_uint64(tx, "duration")?,
        hash_algorithm: validation::read_enum(tx, "hashAlgorithm", "Invalid Hash Algorithm")?,
        recipient_address: Address::read(tx, "recipientAddress")?,
    })
}

pub fn secret_proof(tx: &Record) -> Result<SecretProof> {
    validation::validate_params(
        tx,
        &[
            Param::required("hashAlgorithm", ParamType::Number),
            Param::required("secret", ParamType::String),
            Param::optional("recipientAddress", ParamType::Object),
            Param::required("proof", ParamType::String),
        ],
    )?;

    let recipient_address = match validation::field(tx, "recipientAddress") {
        Some(_) => Some(Address::read(tx, "recipientAddress")?),
        None => None,
    };

    Ok(SecretProof {
        hash_algorithm: validation::read_enum(tx, "hashAlgorithm", "Invalid Hash Algorithm")?,
        secret: validation::read_string(tx, "secret")?,
        recipient_address,
        proof: validation::read_string(tx, "proof")?,
    })
}

pub fn hash_lock(tx: &Record) -> Result<HashLock> {
    validation::validate_params(
        tx,
        &[
            Param::required("mosaicId", ParamType::String),
            Param::required("amount", ParamType::String),
            Param::required("duration", ParamType::String),
            Param::required("hash", ParamType::String),
        ],
    )?;

    Ok(HashLock {
        mosaic: locked_mosaic(tx)?,
        duration: validation::read_uint64(tx, "duration")?,
        hash: validation::read_string(tx, "hash")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    const SECRET: &str = "760B2B3C7B5F4A4A6E2F9E2FA3C1D8F1D0F0E6E9C3A6A2B1B3C4D5E6F7A8B9C0";

    fn lock_sample(hash_algorithm: i64) -> Value {
        json!({
            "mosaicId": "85BBEA6CC462B244",
            "amount": "10000000",
            "duration": "480",
            "hashAlgorithm": hash_algorithm,
            "secret": SECRET,
            "recipientAddress": {
                "address": "TAO6QEUC3APBTMDAETMG6IZJI7YOXWHLGC5T4HA4",
                "networkType": 152
            }
        })
    }

    #[test]
    fn secret_lock_accepts_every_known_algorithm() {
        for algorithm in 0..=3 {
            let body = secret_lock(lock_sample(algorithm).as_object().unwrap()).unwrap();
            assert_eq!(u8::from(body.hash_algorithm), algorithm as u8);
        }
    }

    #[test]
    fn secret_lock_rejects_unknown_algorithm() {
        let err = secret_lock(lock_sample(4).as_object().unwrap()).expect_err("algorithm 4");
        assert_eq!(err.to_string(), "Invalid parameter: Invalid Hash Algorithm");
    }

    #[test]
    fn secret_lock_nests_the_mosaic() {
        let body = secret_lock(lock_sample(0).as_object().unwrap()).unwrap();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["mosaic"], json!({ "id": "85BBEA6CC462B244", "amount": "10000000" }));
    }

    #[test]
    fn secret_lock_requires_recipient() {
        let mut tx = lock_sample(0);
        tx.as_object_mut().unwrap().remove("recipientAddress");
        assert!(secret_lock(tx.as_object().unwrap()).is_err());
    }

    #[test]
    fn secret_proof_without_recipient() {
        let tx = json!({ "hashAlgorithm": 0, "secret": SECRET, "proof": "B778A39A3663719DFC5E48C9D78431B1E45C2AF9DF538782BF199C189DABEAC7" });
        let body = secret_proof(tx.as_object().unwrap()).unwrap();
        assert!(body.recipient_address.is_none());
    }

    #[test]
    fn secret_proof_validates_recipient_when_present() {
        let tx = json!({
            "hashAlgorithm": 0,
            "secret": SECRET,
            "proof": "B778",
            "recipientAddress": { "address": "TAO6QEUC3APBTMDAETMG6IZJI7YOXWHLGC5T4HA4", "networkType": 1 }
        });
        assert!(secret_proof(tx.as_object().unwrap()).is_err());
    }

    #[test]
    fn secret_proof_rejects_unknown_algorithm() {
        let tx = json!({ "hashAlgorithm": 9, "secret": SECRET, "proof": "B778" });
        let err = secret_proof(tx.as_object().unwrap()).expect_err("algorithm 9");
        assert_eq!(err.to_string(), "Invalid parameter: Invalid Hash Algorithm");
    }

    #[test]
    fn hash_lock_maps_fields() {
        let tx = json!({
            "mosaicId": "85BBEA6CC462B244",
            "amount": "10000000",
            "duration": "480",
            "hash": "8498B38D89C1DC8A448EA5824938FF828926CD9F7747B1844B59B4B6807E878B"
        });
        let body = hash_lock(tx.as_object().unwrap()).unwrap();
        assert_eq!(body.mosaic.amount.value(), 10_000_000);
        assert_eq!(body.duration.value(), 480);
    }
}
