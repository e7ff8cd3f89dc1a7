//! Aggregate transactions: inner transactions plus cosignatures.
//!
//! Inner transactions keep their input order; it is the execution order all
//! cosigners agree to. Aggregates inside aggregates are rejected.

use serde::{Deserialize, Serialize};

use crate::body::{build_body, TransactionBody};
use crate::error::{Nem2Error, Result};
use crate::header::{embedded_header, EmbeddedHeader};
use crate::registry::TransactionType;
use crate::types::Cosignature;
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerTransaction {
    pub common: EmbeddedHeader,
    #[serde(flatten)]
    pub body: TransactionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub inner_transactions: Vec<InnerTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

pub fn inner_transaction(tx: &Record) -> Result<InnerTransaction> {
    let common = embedded_header(tx)?;
    let kind = TransactionType::try_from(common.transaction_type)?;
    if kind.is_aggregate() {
        return Err(Nem2Error::invalid(
            "Aggregate transactions cannot be nested in an aggregate",
        ));
    }

    Ok(InnerTransaction {
        common,
        body: build_body(kind, tx)?,
    })
}

pub fn aggregate(tx: &Record) -> Result<Aggregate> {
    validation::validate_params(
        tx,
        &[
            Param::required("innerTransactions", ParamType::Array),
            Param::optional("cosignatures", ParamType::Array),
        ],
    )?;

    let inner_transactions = validation::read_array(tx, "innerTransactions")?
        .iter()
        .map(|inner| inner_transaction(validation::as_record(inner, "innerTransactions")?))
        .collect::<Result<Vec<_>>>()?;

    let cosignatures = match validation::field(tx, "cosignatures") {
        None => Vec::new(),
        Some(_) => validation::read_array(tx, "cosignatures")?
            .iter()
            .map(|cosignature| {
                Cosignature::from_record(validation::as_record(cosignature, "cosignatures")?)
            })
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(Aggregate {
        inner_transactions,
        cosignatures,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn inner_transfer() -> Value {
        json!({
            "type": 0x4154,
            "network": 152,
            "version": 1,
            "signerPublicKey": "9801508C58666C746F471538E43002B85B1CD542F9874B2861183919BA8787B6",
            "recipientAddress": {
                "address": "TAO6QEUC3APBTMDAETMG6IZJI7YOXWHLGC5T4HA4",
                "networkType": 152
            },
            "mosaics": [{ "id": "308F144790CD7BC4", "amount": "1000000000" }],
            "message": { "payload": "inner", "type": 0 }
        })
    }

    fn inner_supply() -> Value {
        json!({
            "type": 0x424D,
            "network": 152,
            "version": 1,
            "signerPublicKey": "9801508C58666C746F471538E43002B85B1CD542F9874B2861183919BA8787B6",
            "mosaicId": "3A8416DB2D53B6C8",
            "action": 1,
            "delta": "1000"
        })
    }

    #[test]
    fn missing_cosignatures_become_an_empty_list() {
        let tx = json!({ "innerTransactions": [inner_transfer()] });
        let body = aggregate(tx.as_object().unwrap()).unwrap();
        assert!(body.cosignatures.is_empty());
        assert_eq!(serde_json::to_value(&body).unwrap()["cosignatures"], json!([]));
    }

    #[test]
    fn inner_order_is_preserved() {
        let tx = json!({ "innerTransactions": [inner_supply(), inner_transfer()] });
        let body = aggregate(tx.as_object().unwrap()).unwrap();
        assert!(matches!(body.inner_transactions[0].body, TransactionBody::MosaicSupply(_)));
        assert!(matches!(body.inner_transactions[1].body, TransactionBody::Transfer(_)));
    }

    #[test]
    fn inner_transaction_merges_header_and_body() {
        let inner = inner_transaction(inner_transfer().as_object().unwrap()).unwrap();
        let value = serde_json::to_value(&inner).unwrap();
        assert_eq!(value["common"]["type"], 0x4154);
        assert!(value["common"]["public_key"].is_string());
        assert!(value["transfer"].is_object());
        assert!(value.get("max_fee").is_none());
    }

    #[test]
    fn inner_transaction_requires_signer() {
        let mut inner = inner_transfer();
        inner.as_object_mut().unwrap().remove("signerPublicKey");
        let tx = json!({ "innerTransactions": [inner] });
        assert!(aggregate(tx.as_object().unwrap()).is_err());
    }

    #[test]
    fn nested_aggregate_is_rejected() {
        let nested = json!({
            "type": 0x4141,
            "network": 152,
            "version": 1,
            "signerPublicKey": "AA",
            "innerTransactions": [inner_transfer()]
        });
        let tx = json!({ "innerTransactions": [nested] });
        let err = aggregate(tx.as_object().unwrap()).expect_err("nested aggregate");
        assert!(matches!(err, Nem2Error::InvalidParameter(ref m) if m.contains("nested")));
    }

    #[test]
    fn unknown_inner_type_is_reported() {
        let mut inner = inner_transfer();
        inner["type"] = json!(0x9999);
        let tx = json!({ "innerTransactions": [inner] });
        assert!(matches!(
            aggregate(tx.as_object().unwrap()),
            Err(Nem2Error::UnknownTransactionType(0x9999))
        ));
    }

    #[test]
    fn cosignatures_are_mapped() {
        let tx = json!({
            "innerTransactions": [inner_transfer()],
            "cosignatures": [{ "signature": "SIG", "publicKey": "KEY" }]
        });
        let body = aggregate(tx.as_object().unwrap()).unwrap();
        assert_eq!(body.cosignatures.len(), 1);
        assert_eq!(body.cosignatures[0].public_key, "KEY");
    }

    #[test]
    fn malformed_cosignature_is_rejected() {
        let tx = json!({
            "innerTransactions": [inner_transfer()],
            "cosignatures": [{ "signature": "SIG" }]
        });
        assert!(aggregate(tx.as_object().unwrap()).is_err());
    }
}
