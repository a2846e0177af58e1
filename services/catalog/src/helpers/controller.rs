//! Controller-level failure helpers.
//!
//! # Purpose and responsibility
//! Builds the fixed-shape body of every 500 response and turns heterogeneous
//! error values into one loggable string.
//!
//! # Security considerations
//! - The 500 body names the module and operation only. Error details go to
//!   the log through `build_error_log`, never to the client.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Logged in place of an absent error value.
pub const ERROR_NOT_DEFINED: &str = "Error not defined";

const UNEXPECTED_ERROR: &str = "unexpected error";

/// Body of a 500 response.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ControllerErrorResponse {
    pub module: String,
    pub operation: String,
    pub message: String,
}

pub fn build_error_response(module: &str, operation: &str) -> ControllerErrorResponse {
    ControllerErrorResponse {
        module: module.to_string(),
        operation: operation.to_string(),
        message: UNEXPECTED_ERROR.to_string(),
    }
}

/// Views an error-like value through the fields `build_error_log` inspects.
///
/// Each accessor returns `None` when the value has nothing usable for that
/// field; `build_error_log` then falls through to the next one.
pub trait ErrorDetails {
    fn stack(&self) -> Option<String> {
        None
    }

    fn message(&self) -> Option<String> {
        None
    }

    fn serialized(&self) -> Option<String> {
        None
    }
}

impl ErrorDetails for serde_json::Value {
    fn stack(&self) -> Option<String> {
        self.get("stack").and_then(field_text)
    }

    fn message(&self) -> Option<String> {
        self.get("message").and_then(field_text)
    }

    fn serialized(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        Some(self.to_string())
    }
}

impl ErrorDetails for anyhow::Error {
    fn stack(&self) -> Option<String> {
        match self.backtrace().status() {
            std::backtrace::BacktraceStatus::Captured => {
                Some(format!("{self:#}\n{}", self.backtrace()))
            }
            _ => None,
        }
    }

    fn message(&self) -> Option<String> {
        Some(format!("{self:#}"))
    }
}

// Empty strings, `false`, `0` and `null` count as missing.
fn field_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(text) if text.is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Payload of a panic caught below a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicReport(String);

impl PanicReport {
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&'static str>() {
            Self((*text).to_string())
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self(text.clone())
        } else {
            Self("non-string panic payload".to_string())
        }
    }
}

impl ErrorDetails for PanicReport {
    fn message(&self) -> Option<String> {
        Some(format!("panicked: {}", self.0))
    }
}

/// Produce a loggable string: stack, then message, then serialized value, then
/// [`ERROR_NOT_DEFINED`] for a missing value.
pub fn build_error_log<E>(err: Option<&E>) -> String
where
    E: ErrorDetails + ?Sized,
{
    let Some(err) = err else {
        return ERROR_NOT_DEFINED.to_string();
    };
    err.stack()
        .or_else(|| err.message())
        .or_else(|| err.serialized())
        .unwrap_or_else(|| ERROR_NOT_DEFINED.to_string())
}
