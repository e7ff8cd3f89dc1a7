use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::validation::{self, Param, ParamType, Record};

/// Change to a multisig account's cosignatory set and approval thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigModification {
    pub min_approval_delta: i8,
    pub min_removal_delta: i8,
    pub public_key_additions: Vec<String>,
    pub public_key_deletions: Vec<String>,
}

fn public_keys(tx: &Record, name: &str) -> Result<Vec<String>> {
    validation::read_array(tx, name)?
        .iter()
        .map(|key| {
            key.as_str().map(str::to_string).ok_or_else(|| {
                Nem2Error::invalid(format!("Parameter \"{name}\" must contain public key strings."))
            })
        })
        .collect()
}

pub fn multisig_modification(tx: &Record) -> Result<MultisigModification> {
    validation::validate_params(
        tx,
        &[
            Param::required("minApprovalDelta", ParamType::Number),
            Param::required("minRemovalDelta", ParamType::Number),
            Param::required("publicKeyAdditions", ParamType::Array),
            Param::required("publicKeyDeletions", ParamType::Array),
        ],
    )?;

    Ok(MultisigModification {
        min_approval_delta: validation::read_int(tx, "minApprovalDelta")?,
        min_removal_delta: validation::read_int(tx, "minRemovalDelta")?,
        public_key_additions: public_keys(tx, "publicKeyAdditions")?,
        public_key_deletions: public_keys(tx, "publicKeyDeletions")?,
    })
}
