//! Core library for NEM2 sign requests: field validation, transaction body
//! builders, and the request types handed to the signing device.
//!
//! Everything here is synchronous and stateless. A [`SignRequest`] only exists
//! once every field of the input has been validated.

pub mod body;
pub mod error;
pub mod header;
pub mod nonce;
pub mod output;
pub mod registry;
pub mod request;
pub mod sign_request;
pub mod types;
pub mod validation;

pub use body::{transaction_body, InnerTransaction, TransactionBody};
pub use error::{Nem2Error, Result};
pub use header::{common_header, embedded_header, CommonHeader, EmbeddedHeader};
pub use nonce::{decode_nonce, NonceInput};
pub use output::{format_path, format_type_code, truncate_middle, AgentError, OutputMode};
pub use registry::TransactionType;
pub use request::{
    parse_path, validate_path, DecryptMessageRequest, EncryptMessageRequest,
    SignTransactionParams, DEFAULT_PATH, MIN_PATH_LENGTH,
};
pub use sign_request::{create_tx, create_tx_from_str, CosigningRequest, SignRequest, TransactionRequest};
pub use types::{Address, Cosignature, Message, Mosaic, NetworkType, Uint64};
pub use validation::{validate_params, Param, ParamType, Record};
