//! Mock transport for testing.
//!
//! Answers requests from a queue of canned responses instead of the network.
//! Supports:
//! - Queued responses, consumed in order
//! - Transport error injection
//! - Request recording for assertions on method, URL, headers and body

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use url::Url;

use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};

/// Mock transport for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.push_response(200, r#"{"id": "ch_1", "amount": 400}"#);
///
/// let client = Client::with_transport(config, Arc::new(mock.clone()))?;
/// let charge = client.charges().retrieve("ch_1").await?;
///
/// assert_eq!(mock.last_request().unwrap().path(), "/v1/charges/ch_1");
/// ```
#[derive(Default, Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses handed out in order.
    responses: VecDeque<Result<ApiResponse, TransportError>>,

    /// Every request seen, oldest first.
    requests: Vec<RecordedRequest>,
}

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Decoded query-string pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Decoded form-body pairs, in order. Empty when there is no body.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        self.body
            .as_deref()
            .map(|body| {
                url::form_urlencoded::parse(body.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First decoded value for `key` in the body or, failing that, the query.
    pub fn param(&self, key: &str) -> Option<String> {
        self.form_pairs()
            .into_iter()
            .chain(self.query_pairs())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.push(Ok(ApiResponse::new(status, body)));
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push_response(status, body.to_string());
    }

    /// Queue a fully built response, e.g. one carrying a request id.
    pub fn push_api_response(&self, response: ApiResponse) {
        self.push(Ok(response));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.push(Err(error));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Request Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn push(&self, response: Result<ApiResponse, TransportError>) {
        self.state().responses.push_back(response);
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.state();

        state.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            headers: request
                .headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            body: request.body,
            api_key: request.api_key.expose_secret().to_string(),
            timeout: request.timeout,
        });

        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no response queued".to_string())))
    }
}
