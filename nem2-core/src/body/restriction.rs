//! Account restriction bodies.
//!
//! The three restriction kinds share field names and differ only in what a
//! list entry is: an address, a mosaic id, or a transaction type code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Nem2Error, Result};
use crate::types::Address;
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestriction<T> {
    pub restriction_type: u16,
    pub restriction_additions: Vec<T>,
    pub restriction_deletions: Vec<T>,
}

fn restriction<T>(
    tx: &Record,
    entry: impl Fn(&Value, &str) -> Result<T>,
) -> Result<AccountRestriction<T>> {
    validation::validate_params(
        tx,
        &[
            Param::required("restrictionType", ParamType::Number),
            Param::required("restrictionAdditions", ParamType::Array),
            Param::required("restrictionDeletions", ParamType::Array),
        ],
    )?;

    let list = |name: &str| -> Result<Vec<T>> {
        validation::read_array(tx, name)?
            .iter()
            .map(|item| entry(item, name))
            .collect()
    };

    Ok(AccountRestriction {
        restriction_type: validation::read_int(tx, "restrictionType")?,
        restriction_additions: list("restrictionAdditions")?,
        restriction_deletions: list("restrictionDeletions")?,
    })
}

pub fn account_address_restriction(tx: &Record) -> Result<AccountRestriction<Address>> {
    restriction(tx, |item, name| {
        Address::from_record(validation::as_record(item, name)?)
    })
}

pub fn account_mosaic_restriction(tx: &Record) -> Result<AccountRestriction<String>> {
    restriction(tx, |item, name| {
        item.as_str().map(str::to_string).ok_or_else(|| {
            Nem2Error::invalid(format!(
                "Parameter \"{name}\" must contain mosaic id strings."
            ))
        })
    })
}

pub fn account_operation_restriction(tx: &Record) -> Result<AccountRestriction<u16>> {
    restriction(tx, |item, name| validation::int_value::<u16>(item, name))
}
