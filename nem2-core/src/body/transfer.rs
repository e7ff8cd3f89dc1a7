use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Address, Message, Mosaic};
use crate::validation::{self, Param, ParamType, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub recipient_address: Address,
    pub mosaics: Vec<Mosaic>,
    pub message: Message,
}

pub fn transfer(tx: &Record) -> Result<Transfer> {
    validation::validate_params(
        tx,
        &[
            Param::required("recipientAddress", ParamType::Object),
            Param::required("mosaics", ParamType::Array),
            Param::required("message", ParamType::Object),
        ],
    )?;

    let mosaics = validation::read_array(tx, "mosaics")?
        .iter()
        .map(|mosaic| Mosaic::from_record(validation::as_record(mosaic, "mosaics")?))
        .collect::<Result<Vec<_>>>()?;

    Ok(Transfer {
        recipient_address: Address::read(tx, "recipientAddress")?,
        mosaics,
        message: Message::from_record(validation::read_record(tx, "message")?)?,
    })
}
