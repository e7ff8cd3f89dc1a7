//! Assembly of the final device sign request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::body::{build_body, TransactionBody};
use crate::error::Result;
use crate::header::{common_header, CommonHeader};
use crate::registry::TransactionType;
use crate::validation::{self, Param, ParamType};

/// Request for the device to sign a fully described transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub address_n: Vec<u32>,
    pub generation_hash: String,
    pub transaction: CommonHeader,
    #[serde(flatten)]
    pub body: TransactionBody,
}

/// Request to cosign; carries no transaction description of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosigningRequest {
    pub address_n: Vec<u32>,
    pub cosigning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignRequest {
    Cosigning(CosigningRequest),
    Transaction(TransactionRequest),
}

impl SignRequest {
    pub fn address_n(&self) -> &[u32] {
        match self {
            SignRequest::Cosigning(request) => &request.address_n,
            SignRequest::Transaction(request) => &request.address_n,
        }
    }

    pub fn is_cosigning(&self) -> bool {
        matches!(self, SignRequest::Cosigning(_))
    }

    pub fn transaction(&self) -> Option<&TransactionRequest> {
        match self {
            SignRequest::Cosigning(_) => None,
            SignRequest::Transaction(request) => Some(request),
        }
    }
}

/// Build a sign request from a caller-supplied transaction description.
///
/// A description with `cosigning: true` short-circuits to a cosigning request
/// and nothing else in it is read. Otherwise the common header is built, the
/// `type` code selects exactly one body builder, and unknown codes fail with
/// [`crate::Nem2Error::UnknownTransactionType`].
pub fn create_tx(tx: &Value, address_n: &[u32], generation_hash: &str) -> Result<SignRequest> {
    let record = validation::as_record(tx, "transaction")?;

    validation::validate_params(record, &[Param::optional("cosigning", ParamType::Boolean)])?;
    if validation::field(record, "cosigning").and_then(Value::as_bool) == Some(true) {
        return Ok(SignRequest::Cosigning(CosigningRequest {
            address_n: address_n.to_vec(),
            cosigning: true,
        }));
    }

    let transaction = common_header(record)?;
    let kind = TransactionType::try_from(transaction.transaction_type)?;
    let body = build_body(kind, record)?;

    Ok(SignRequest::Transaction(TransactionRequest {
        address_n: address_n.to_vec(),
        generation_hash: generation_hash.to_string(),
        transaction,
        body,
    }))
}

pub fn create_tx_from_str(
    json_input: &str,
    address_n: &[u32],
    generation_hash: &str,
) -> Result<SignRequest> {
    let tx: Value = serde_json::from_str(json_input)?;
    create_tx(&tx, address_n, generation_hash)
}
