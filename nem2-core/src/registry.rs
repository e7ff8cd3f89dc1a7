//! Transaction type codes understood by the sign-request builder.
//!
//! [`TransactionType::ALL`] is the single table of supported codes. Decoding a
//! raw `u16` is the only place an unknown type can surface; everything past
//! that point matches exhaustively on the enum.

use crate::error::{Nem2Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TransactionType {
    Transfer = 0x4154,
    MosaicDefinition = 0x414D,
    MosaicSupply = 0x424D,
    NamespaceRegistration = 0x414E,
    AddressAlias = 0x424E,
    MosaicAlias = 0x434E,
    AccountMetadata = 0x4144,
    MosaicMetadata = 0x4244,
    NamespaceMetadata = 0x4344,
    SecretLock = 0x4152,
    SecretProof = 0x4252,
    HashLock = 0x4148,
    AggregateComplete = 0x4141,
    AggregateBonded = 0x4241,
    AccountAddressRestriction = 0x4150,
    AccountMosaicRestriction = 0x4250,
    AccountOperationRestriction = 0x4350,
    MultisigModification = 0x4155,
}

impl TransactionType {
    pub const ALL: [TransactionType; 18] = [
        TransactionType::Transfer,
        TransactionType::MosaicDefinition,
        TransactionType::MosaicSupply,
        TransactionType::NamespaceRegistration,
        TransactionType::AddressAlias,
        TransactionType::MosaicAlias,
        TransactionType::AccountMetadata,
        TransactionType::MosaicMetadata,
        TransactionType::NamespaceMetadata,
        TransactionType::SecretLock,
        TransactionType::SecretProof,
        TransactionType::HashLock,
        TransactionType::AggregateComplete,
        TransactionType::AggregateBonded,
        TransactionType::AccountAddressRestriction,
        TransactionType::AccountMosaicRestriction,
        TransactionType::AccountOperationRestriction,
        TransactionType::MultisigModification,
    ];

    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Stable snake_case identifier for listings and log fields.
    pub const fn name(self) -> &'static str {
        match self {
            TransactionType::Transfer => "transfer",
            TransactionType::MosaicDefinition => "mosaic_definition",
            TransactionType::MosaicSupply => "mosaic_supply",
            TransactionType::NamespaceRegistration => "namespace_registration",
            TransactionType::AddressAlias => "address_alias",
            TransactionType::MosaicAlias => "mosaic_alias",
            TransactionType::AccountMetadata => "account_metadata",
            TransactionType::MosaicMetadata => "mosaic_metadata",
            TransactionType::NamespaceMetadata => "namespace_metadata",
            TransactionType::SecretLock => "secret_lock",
            TransactionType::SecretProof => "secret_proof",
            TransactionType::HashLock => "hash_lock",
            TransactionType::AggregateComplete => "aggregate_complete",
            TransactionType::AggregateBonded => "aggregate_bonded",
            TransactionType::AccountAddressRestriction => "account_address_restriction",
            TransactionType::AccountMosaicRestriction => "account_mosaic_restriction",
            TransactionType::AccountOperationRestriction => "account_operation_restriction",
            TransactionType::MultisigModification => "multisig_modification",
        }
    }

    pub const fn is_aggregate(self) -> bool {
        matches!(
            self,
            TransactionType::AggregateComplete | TransactionType::AggregateBonded
        )
    }
}

impl TryFrom<u16> for TransactionType {
    type Error = Nem2Error;

    fn try_from(code: u16) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
            .ok_or(Nem2Error::UnknownTransactionType(i64::from(code)))
    }
}

impl TryFrom<i64> for TransactionType {
    type Error = Nem2Error;

    fn try_from(code: i64) -> Result<Self> {
        u16::try_from(code)
            .map_err(|_| Nem2Error::UnknownTransactionType(code))
            .and_then(Self::try_from)
    }
}
