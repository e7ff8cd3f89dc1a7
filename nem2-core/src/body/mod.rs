//! Per-type transaction body builders and the dispatch over them.
//!
//! Each builder validates the fields it needs on its own and returns a complete
//! fragment. [`build_body`] is the only place that maps a [`TransactionType`]
//! to its builder, and it matches exhaustively.

pub mod aggregate;
pub mod lock;
pub mod metadata;
pub mod mosaic;
pub mod multisig;
pub mod namespace;
pub mod restriction;
pub mod transfer;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::TransactionType;
use crate::types::Address;
use crate::validation::{self, Param, ParamType, Record};

pub use aggregate::{Aggregate, InnerTransaction};
pub use lock::{HashAlgorithm, HashLock, SecretLock, SecretProof};
pub use metadata::{Metadata, MAX_METADATA_VALUE_SIZE};
pub use mosaic::{MosaicDefinition, MosaicSupply, SupplyAction};
pub use multisig::MultisigModification;
pub use namespace::{AddressAlias, AliasAction, MosaicAlias, NamespaceRegistration, RegistrationType};
pub use restriction::AccountRestriction;
pub use transfer::Transfer;

/// Exactly one type-specific fragment. Serializes as `{"<variant>": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionBody {
    Transfer(Transfer),
    MosaicDefinition(MosaicDefinition),
    MosaicSupply(MosaicSupply),
    NamespaceRegistration(NamespaceRegistration),
    AddressAlias(AddressAlias),
    MosaicAlias(MosaicAlias),
    NamespaceMetadata(Metadata),
    MosaicMetadata(Metadata),
    AccountMetadata(Metadata),
    SecretLock(SecretLock),
    SecretProof(SecretProof),
    HashLock(HashLock),
    Aggregate(Aggregate),
    AccountAddressRestriction(AccountRestriction<Address>),
    AccountMosaicRestriction(AccountRestriction<String>),
    AccountOperationRestriction(AccountRestriction<u16>),
    MultisigModification(MultisigModification),
}

/// Read the `type` code of a record and build the matching body.
pub fn transaction_body(tx: &Record) -> Result<TransactionBody> {
    validation::validate_params(tx, &[Param::required("type", ParamType::Number)])?;
    let kind = TransactionType::try_from(validation::read_type_code(tx)?)?;
    build_body(kind, tx)
}

pub fn build_body(kind: TransactionType, tx: &Record) -> Result<TransactionBody> {
    let body = match kind {
        TransactionType::Transfer => TransactionBody::Transfer(transfer::transfer(tx)?),
        TransactionType::MosaicDefinition => {
            TransactionBody::MosaicDefinition(mosaic::mosaic_definition(tx)?)
        }
        TransactionType::MosaicSupply => TransactionBody::MosaicSupply(mosaic::mosaic_supply(tx)?),
        TransactionType::NamespaceRegistration => {
            TransactionBody::NamespaceRegistration(namespace::namespace_registration(tx)?)
        }
        TransactionType::AddressAlias => {
            TransactionBody::AddressAlias(namespace::address_alias(tx)?)
        }
        TransactionType::MosaicAlias => TransactionBody::MosaicAlias(namespace::mosaic_alias(tx)?),
        TransactionType::NamespaceMetadata => {
            TransactionBody::NamespaceMetadata(metadata::namespace_metadata(tx)?)
        }
        TransactionType::MosaicMetadata => {
            TransactionBody::MosaicMetadata(metadata::mosaic_metadata(tx)?)
        }
        TransactionType::AccountMetadata => {
            TransactionBody::AccountMetadata(metadata::account_metadata(tx)?)
        }
        TransactionType::SecretLock => TransactionBody::SecretLock(lock::secret_lock(tx)?),
        TransactionType::SecretProof => TransactionBody::SecretProof(lock::secret_proof(tx)?),
        TransactionType::HashLock => TransactionBody::HashLock(lock::hash_lock(tx)?),
        TransactionType::AggregateComplete | TransactionType::AggregateBonded => {
            TransactionBody::Aggregate(aggregate::aggregate(tx)?)
        }
        TransactionType::AccountAddressRestriction => {
            TransactionBody::AccountAddressRestriction(restriction::account_address_restriction(tx)?)
        }
        TransactionType::AccountMosaicRestriction => {
            TransactionBody::AccountMosaicRestriction(restriction::account_mosaic_restriction(tx)?)
        }
        TransactionType::AccountOperationRestriction => {
            TransactionBody::AccountOperationRestriction(
                restriction::account_operation_restriction(tx)?,
            )
        }
        TransactionType::MultisigModification => {
            TransactionBody::MultisigModification(multisig::multisig_modification(tx)?)
        }
    };

    Ok(body)
}
