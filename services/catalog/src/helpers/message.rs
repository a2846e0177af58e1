//! Message payload builders.
//!
//! # Key invariants and assumptions
//! - Both builders are total over any code string and never fail.
//! - The code is carried verbatim; no translation or formatting is applied.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": code}` body returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// `{"error": true, "message": code}` value a service returns for an expected
/// business-rule failure.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub error: bool,
    pub message: String,
}

impl ErrorMessage {
    pub fn code(&self) -> &str {
        &self.message
    }

    /// Client-facing form of this error: the same code in a plain message.
    pub fn to_message(&self) -> Message {
        build_message(&self.message)
    }
}

pub fn build_message(code: &str) -> Message {
    Message {
        message: code.to_string(),
    }
}

pub fn build_error_message(code: &str) -> ErrorMessage {
    ErrorMessage {
        error: true,
        message: code.to_string(),
    }
}
