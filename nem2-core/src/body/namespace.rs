//! Namespace registration and alias bodies.

use serde::{Deserialize, Serialize};

use crate::error::{Nem2Error, Result};
use crate::types::{Address, Uint64};
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum RegistrationType {
    Root = 0,
    Sub = 1,
}

impl TryFrom<u8> for RegistrationType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(RegistrationType::Root),
            1 => Ok(RegistrationType::Sub),
            _ => Err(Nem2Error::invalid("Invalid Registration Type")),
        }
    }
}

impl From<RegistrationType> for u8 {
    fn from(value: RegistrationType) -> Self {
        value as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AliasAction {
    Unlink = 0,
    Link = 1,
}

impl TryFrom<u8> for AliasAction {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(AliasAction::Unlink),
            1 => Ok(AliasAction::Link),
            _ => Err(Nem2Error::invalid("Invalid Alias Action")),
        }
    }
}

impl From<AliasAction> for u8 {
    fn from(value: AliasAction) -> Self {
        value as u8
    }
}

/// Root namespaces carry a `duration`, sub-namespaces a `parent_id`; never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRegistration {
    pub registration_type: RegistrationType,
    pub namespace_name: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<Uint64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAlias {
    pub namespace_id: String,
    pub alias_action: AliasAction,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicAlias {
    pub namespace_id: String,
    pub mosaic_id: String,
    pub alias_action: AliasAction,
}

pub fn namespace_registration(tx: &Record) -> Result<NamespaceRegistration> {
    validation::validate_params(
        tx,
        &[
            Param::required("registrationType", ParamType::Number),
            Param::required("namespaceName", ParamType::String),
            Param::required("id", ParamType::String),
        ],
    )?;

    let registration_type: RegistrationType =
        validation::read_enum(tx, "registrationType", "Invalid Registration Type")?;

    let (duration, parent_id) = match registration_type {
        RegistrationType::Root => {
            validation::validate_params(tx, &[Param::required("duration", ParamType::String)])?;
            (Some(validation::read_uint64(tx, "duration")?), None)
        }
        RegistrationType::Sub => {
            validation::validate_params(tx, &[Param::required("parentId", ParamType::String)])?;
            (None, Some(validation::read_string(tx, "parentId")?))
        }
    };

    Ok(NamespaceRegistration {
        registration_type,
        namespace_name: validation::read_string(tx, "namespaceName")?,
        id: validation::read_string(tx, "id")?,
        duration,
        parent_id,
    })
}

pub fn address_alias(tx: &Record) -> Result<AddressAlias> {
    validation::validate_params(
        tx,
        &[
            Param::required("namespaceId", ParamType::String),
            Param::required("aliasAction", ParamType::Number),
            Param::required("address", ParamType::Object),
        ],
    )?;

    Ok(AddressAlias {
        namespace_id: validation::read_string(tx, "namespaceId")?,
        alias_action: validation::read_enum(tx, "aliasAction", "Invalid Alias Action")?,
        address: Address::read(tx, "address")?,
    })
}

pub fn mosaic_alias(tx: &Record) -> Result<MosaicAlias> {
    validation::validate_params(
        tx,
        &[
            Param::required("namespaceId", ParamType::String),
            Param::required("mosaicId", ParamType::String),
            Param::required("aliasAction", ParamType::Number),
        ],
    )?;

    Ok(MosaicAlias {
        namespace_id: validation::read_string(tx, "namespaceId")?,
        mosaic_id: validation::read_string(tx, "mosaicId")?,
        alias_action: validation::read_enum(tx, "aliasAction", "Invalid Alias Action")?,
    })
}
