//! Error types for sign-request construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Nem2Error {
    /// A field is missing, has the wrong JSON kind, or carries an out-of-range value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any integer code, including ones outside the `u16` range.
    #[error("Unknown transaction type: {}", type_code(.0))]
    UnknownTransactionType(i64),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Nem2Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

fn type_code(code: &i64) -> String {
    if *code < 0 {
        code.to_string()
    } else {
        format!("{code:#06x}")
    }
}

pub type Result<T> = std::result::Result<T, Nem2Error>;
