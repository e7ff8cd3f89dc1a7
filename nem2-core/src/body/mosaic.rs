//! Mosaic definition and supply change bodies.

use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::nonce::decode_nonce;
use crate::types::Uint64;
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicDefinition {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nonce: Option<u32>,
    pub mosaic_id: String,
    pub flags: u8,
    pub divisibility: u8,
    pub duration: Uint64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SupplyAction {
    Decrease = 0,
    Increase = 1,
}

impl TryFrom<u8> for SupplyAction {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(SupplyAction::Decrease),
            1 => Ok(SupplyAction::Increase),
            _ => Err(Nem2Error::invalid("Invalid Supply Action")),
        }
    }
}

impl From<SupplyAction> for u8 {
    fn from(value: SupplyAction) -> Self {
        value as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicSupply {
    pub mosaic_id: String,
    pub action: SupplyAction,
    pub delta: Uint64,
}

pub fn mosaic_definition(tx: &Record) -> Result<MosaicDefinition> {
    validation::validate_params(
        tx,
        &[
            Param::required("id", ParamType::String),
            Param::required("flags", ParamType::Number),
            Param::required("divisibility", ParamType::Number),
            Param::required("duration", ParamType::String),
        ],
    )?;

    let nonce = validation::field(tx, "nonce").map(decode_nonce).transpose()?;

    Ok(MosaicDefinition {
        nonce,
        mosaic_id: validation::read_string(tx, "id")?,
        flags: validation::read_int(tx, "flags")?,
        divisibility: validation::read_int(tx, "divisibility")?,
        duration: validation::read_uint64(tx, "duration")?,
    })
}

pub fn mosaic_supply(tx: &Record) -> Result<MosaicSupply> {
    validation::validate_params(
        tx,
        &[
            Param::required("mosaicId", ParamType::String),
            Param::required("action", ParamType::Number),
            Param::required("delta", ParamType::String),
        ],
    )?;

    Ok(MosaicSupply {
        mosaic_id: validation::read_string(tx, "mosaicId")?,
        action: validation::read_enum(tx, "action", "Invalid Supply Action")?,
        delta: validation::read_uint64(tx, "delta")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn definition(nonce: serde_json::Value) -> serde_json::Value {
        json!({
            "type": 0x414D,
            "nonce": nonce,
            "id": "3A8416DB2D53B6C8",
            "flags": 7,
            "divisibility": 6,
            "duration": "1000"
        })
    }

    #[test]
    fn plain_and_wrapped_nonce_build_the_same_body() {
        let plain = mosaic_definition(definition(json!(5)).as_object().unwrap()).unwrap();
        let wrapped =
            mosaic_definition(definition(json!({ "nonce": [5, 0, 0, 0] })).as_object().unwrap())
                .unwrap();
        assert_eq!(plain.nonce, Some(5));
        assert_eq!(plain, wrapped);
    }

    #[test]
    fn malformed_nonce_is_an_invalid_parameter() {
        let err = mosaic_definition(definition(json!("5")).as_object().unwrap())
            .expect_err("string nonce");
        assert!(matches!(err, Nem2Error::InvalidParameter(_)));
    }

    #[test]
    fn absent_nonce_is_omitted() {
        let mut tx = definition(json!(null));
        tx.as_object_mut().unwrap().remove("nonce");
        let body = mosaic_definition(tx.as_object().unwrap()).unwrap();
        assert!(body.nonce.is_none());
        assert!(serde_json::to_value(&body).unwrap().get("nonce").is_none());
    }

    #[test]
    fn definition_requires_duration() {
        let mut tx = definition(json!(1));
        tx.as_object_mut().unwrap().remove("duration");
        assert!(mosaic_definition(tx.as_object().unwrap()).is_err());
    }

    #[test]
    fn supply_maps_fields() {
        let body = mosaic_supply(
            json!({ "mosaicId": "3A8416DB2D53B6C8", "action": 1, "delta": "1000000" })
                .as_object()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(body.action, SupplyAction::Increase);
        assert_eq!(body.delta.value(), 1_000_000);
    }

    #[test]
    fn supply_rejects_unknown_action() {
        let err = mosaic_supply(
            json!({ "mosaicId": "3A8416DB2D53B6C8", "action": 2, "delta": "1" })
                .as_object()
                .unwrap(),
        )
        .expect_err("action 2");
        assert_eq!(err.to_string(), "Invalid parameter: Invalid Supply Action");
    }
}
