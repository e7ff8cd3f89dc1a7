//! Header builders for top-level and embedded transactions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{NetworkType, Uint64};
use crate::validation::{self, Param, ParamType, Record};

/// Fields shared by every top-level transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonHeader {
    #[serde(rename = "type")]
    pub transaction_type: u16,
    pub network_type: NetworkType,
    pub version: u8,
    pub max_fee: Uint64,
    pub deadline: Uint64,
}

/// Header of a transaction nested in an aggregate. Fee and deadline belong to the
/// enclosing aggregate, so only the signer is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedHeader {
    #[serde(rename = "type")]
    pub transaction_type: u16,
    pub network_type: NetworkType,
    pub version: u8,
    pub public_key: String,
}

pub fn common_header(tx: &Record) -> Result<CommonHeader> {
    validation::validate_params(
        tx,
        &[
            Param::required("type", ParamType::Number),
            Param::required("network", ParamType::Number),
            Param::required("version", ParamType::Number),
            Param::required("maxFee", ParamType::String),
            Param::required("deadline", ParamType::String),
        ],
    )?;

    Ok(CommonHeader {
        transaction_type: validation::read_type_code(tx)?,
        network_type: NetworkType::try_from(validation::read_int::<u8>(tx, "network")?)?,
        version: validation::read_int(tx, "version")?,
        max_fee: validation::read_uint64(tx, "maxFee")?,
        deadline: validation::read_uint64(tx, "deadline")?,
    })
}

pub fn embedded_header(tx: &Record) -> Result<EmbeddedHeader> {
    validation::validate_params(
        tx,
        &[
            Param::required("type", ParamType::Number),
            Param::required("network", ParamType::Number),
            Param::required("version", ParamType::Number),
            Param::required("signerPublicKey", ParamType::String),
        ],
    )?;

    Ok(EmbeddedHeader {
        transaction_type: validation::read_type_code(tx)?,
        network_type: NetworkType::try_from(validation::read_int::<u8>(tx, "network")?)?,
        version: validation::read_int(tx, "version")?,
        public_key: validation::read_string(tx, "signerPublicKey")?,
    })
}
