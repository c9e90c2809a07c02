//! Errors reported by the API in non-200 responses.
//!
//! The API answers failures with a JSON body shaped like
//!
//! ```json
//! {"error": {"type": "card_error", "code": "card_declined",
//!            "message": "Your card was declined.", "param": "number"},
//!  "request_id": "req_8fK2"}
//! ```
//!
//! [`ApiError::from_response`] never fails: a body that is empty, not JSON, or
//! shaped differently still produces an error carrying the status code.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Broad category of an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ApiConnectionError,
    ApiError,
    AuthenticationError,
    /// The card could not be charged; see [`ErrorCode`] for the reason.
    CardError,
    IdempotencyError,
    InvalidRequestError,
    RateLimitError,
    #[serde(other)]
    Unknown,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ApiConnectionError => "api_connection_error",
            ErrorType::ApiError => "api_error",
            ErrorType::AuthenticationError => "authentication_error",
            ErrorType::CardError => "card_error",
            ErrorType::IdempotencyError => "idempotency_error",
            ErrorType::InvalidRequestError => "invalid_request_error",
            ErrorType::RateLimitError => "rate_limit_error",
            ErrorType::Unknown => "unknown",
        }
    }
}

/// Machine-readable reason for a card error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    IncorrectNumber,
    InvalidNumber,
    InvalidExpiryMonth,
    InvalidExpiryYear,
    InvalidCvc,
    ExpiredCard,
    IncorrectCvc,
    CardDeclined,
    Missing,
    ProcessingError,
    #[serde(other)]
    Other,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IncorrectNumber => "incorrect_number",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidExpiryMonth => "invalid_expiry_month",
            ErrorCode::InvalidExpiryYear => "invalid_expiry_year",
            ErrorCode::InvalidCvc => "invalid_cvc",
            ErrorCode::ExpiredCard => "expired_card",
            ErrorCode::IncorrectCvc => "incorrect_cvc",
            ErrorCode::CardDeclined => "card_declined",
            ErrorCode::Missing => "missing",
            ErrorCode::ProcessingError => "processing_error",
            ErrorCode::Other => "other",
        }
    }
}

/// A failure reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: u16,

    /// Human-readable message.
    pub message: String,

    /// Error category, when the body carried one.
    pub error_type: Option<ErrorType>,

    /// Specific reason, mostly for card errors.
    pub code: Option<ErrorCode>,

    /// Request parameter the error relates to.
    pub param: Option<String>,

    /// Identifier of the failed request, for support.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Create an error with only a status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_type: None,
            code: None,
            param: None,
            request_id: None,
        }
    }

    /// Decode a non-200 response body.
    ///
    /// Fields are extracted independently, so a body with a well-formed
    /// message but an unexpected `type` still keeps its message.
    /// `request_id_header` is used when the body has no request id.
    pub fn from_response(status: u16, body: &[u8], request_id_header: Option<&str>) -> Self {
        let mut error = Self::new(status, format!("request failed with status {}", status));
        error.request_id = request_id_header.map(str::to_string);

        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return error;
        };

        let detail = value.get("error").filter(|d| d.is_object());

        if let Some(message) = detail_field(detail, "message")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
        {
            error.message = message.to_string();
        } else if let Some(message) = value.get("error").and_then(Value::as_str) {
            error.message = message.to_string();
        }

        error.error_type =
            detail_field(detail, "type").and_then(|v| serde_json::from_value(v.clone()).ok());
        error.code =
            detail_field(detail, "code").and_then(|v| serde_json::from_value(v.clone()).ok());
        error.param = detail_field(detail, "param")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(request_id) = value.get("request_id").and_then(Value::as_str) {
            error.request_id = Some(request_id.to_string());
        }

        error
    }

    /// Set the error category.
    pub fn with_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The card could not be charged.
    pub fn is_card_error(&self) -> bool {
        self.error_type == Some(ErrorType::CardError)
    }

    /// The card was declined by the issuer.
    pub fn is_declined(&self) -> bool {
        self.is_card_error() && self.code == Some(ErrorCode::CardDeclined)
    }
}

fn detail_field<'v>(detail: Option<&'v Value>, name: &str) -> Option<&'v Value> {
    detail.and_then(|d| d.get(name))
}
