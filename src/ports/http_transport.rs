//! HTTP transport port.
//!
//! Separates building an API request from putting it on the wire. The client
//! produces a fully encoded [`ApiRequest`]; an implementation sends it and
//! hands back the status and raw body without interpreting either.
//!
//! # Design
//!
//! - **No retries**: a failed send is reported once
//! - **Whole bodies**: the response body is read completely before returning
//! - **Credential travels separately** from the URL so it never ends up in logs

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Port for sending encoded requests to the API.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and read the whole response.
    ///
    /// Any HTTP status is a successful send; only failures to get a response
    /// at all are errors.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to send.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,

    /// Full URL including any query string. Never carries the credential.
    pub url: Url,

    /// Extra headers, e.g. the API version.
    pub headers: Vec<(&'static str, String)>,

    /// Form-encoded body for non-GET requests.
    pub body: Option<String>,

    /// Sent as the Basic-auth username with a blank password.
    pub api_key: SecretString,

    /// Per-request deadline, overriding the transport default.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Look up a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,

    /// Value of the `Request-Id` header, if present.
    pub request_id: Option<String>,
}

impl ApiResponse {
    /// Create a response with the given status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            request_id: None,
        }
    }

    /// Attach a request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failure to get any response from the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("http transport error: {0}")]
    Other(String),
}
