//! Output helpers for human and agent modes.

use serde::Serialize;

use crate::error::Nem2Error;
use crate::registry::TransactionType;
use crate::request::HARDENED;

/// Human (TTY) vs Agent (non-interactive) output selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Agent,
}

/// Agent-mode error payload.
#[derive(Debug, Clone, Serialize)]
pub struct AgentError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AgentError {
    pub fn new(error: &str, code: i32, message: Option<String>) -> Self {
        Self {
            error: error.to_string(),
            code,
            message,
        }
    }

    /// Validation failures share exit code 1.
    pub fn from_core(err: &Nem2Error) -> Self {
        let error = match err {
            Nem2Error::InvalidParameter(_) => "invalid_parameter",
            Nem2Error::UnknownTransactionType(_) => "unknown_transaction_type",
            Nem2Error::Json(_) => "invalid_json",
        };
        Self::new(error, 1, Some(err.to_string()))
    }
}

/// Shorten long keys and addresses for human-readable tables.
pub fn truncate_middle(value: &str) -> String {
    let s = value.trim();
    if s.chars().count() <= 14 {
        return s.to_string();
    }

    let start: String = s.chars().take(6).collect();
    let end: String = s
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    format!("{start}...{end}")
}

/// Render a type code with its name when known, e.g. `0x4154 (transfer)`.
pub fn format_type_code(code: u16) -> String {
    match TransactionType::try_from(code) {
        Ok(kind) => format!("{code:#06x} ({})", kind.name()),
        Err(_) => format!("{code:#06x} (unknown)"),
    }
}

/// Render an address path as `m/44'/43'/0'`.
pub fn format_path(path: &[u32]) -> String {
    let mut out = String::from("m");
    for index in path {
        if index & HARDENED != 0 {
            out.push_str(&format!("/{}'", index & !HARDENED));
        } else {
            out.push_str(&format!("/{index}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_value_is_unchanged() {
        assert_eq!(truncate_middle("TAO6QE"), "TAO6QE");
    }

    #[test]
    fn truncate_long_ascii_value() {
        assert_eq!(
            truncate_middle("TAO6QEUC3APBTMDAETMG6IZJI7YOXWHLGC5T4HA4"),
            "TAO6QE...4HA4"
        );
    }

    #[test]
    fn truncate_unicode_without_panic() {
        let han = "\u{4F60}";
        let value = han.repeat(16);
        assert_eq!(truncate_middle(&value), format!("{}...{}", han.repeat(6), han.repeat(4)));
    }

    #[test]
    fn formats_known_and_unknown_codes() {
        assert_eq!(format_type_code(0x4154), "0x4154 (transfer)");
        assert_eq!(format_type_code(0x9999), "0x9999 (unknown)");
    }

    #[test]
    fn formats_hardened_path() {
        assert_eq!(format_path(&[0x8000_002C, 0x8000_002B, 0x8000_0000, 1]), "m/44'/43'/0'/1");
    }

    #[test]
    fn agent_error_names_the_failure() {
        let err = AgentError::from_core(&Nem2Error::UnknownTransactionType(0x9999));
        assert_eq!(err.error, "unknown_transaction_type");
        assert_eq!(err.code, 1);
    }
}
