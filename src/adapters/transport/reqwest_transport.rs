//! `HttpTransport` over a pooled `reqwest::Client`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use secrecy::ExposeSecret;

use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends requests with `reqwest`, reusing pooled connections across calls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests time out after `timeout` unless the
    /// request carries its own deadline.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Wrap an already configured client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .http_client
            .request(method, request.url)
            .basic_auth(request.api_key.expose_secret(), Option::<&str>::None);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(map_reqwest_error)?;

        tracing::trace!(status, bytes = body.len(), "response received");

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
            request_id,
        })
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use url::Url;

    #[test]
    fn builds_with_timeout() {
        assert!(ReqwestTransport::new(Duration::from_secs(30)).is_ok());
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines; nothing listens there.
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let request = ApiRequest {
            method: Method::Get,
            url: Url::parse("http://127.0.0.1:9/v1/charges").unwrap(),
            headers: Vec::new(),
            body: None,
            api_key: SecretString::new("sk_test_123".to_string()),
            timeout: None,
        };

        let result = transport.send(request).await;

        assert!(matches!(
            result,
            Err(TransportError::Connect(_)) | Err(TransportError::Other(_))
        ));
    }
}
