//! The client context and request transport.
//!
//! A [`Client`] owns the credential, base URL and transport. It builds each
//! request from a method, path and [`Params`], sends it through an
//! [`HttpTransport`], and turns non-200 answers into [`ApiError`]s. Resource
//! handles such as [`Client::charges`] layer typed calls on top.

mod params;

pub use params::{escape_segment, Params};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use url::Url;

use crate::adapters::transport::ReqwestTransport;
use crate::config::ClientConfig;
use crate::domain::ApiError;
use crate::error::Error;
use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::resources::{
    Cards, Charges, Coupons, Customers, InvoiceItems, Invoices, Plans, Subscriptions, Tokens,
};

/// API version sent with every request.
pub const API_VERSION: &str = "2018-03-26";

/// Header carrying [`API_VERSION`].
pub const VERSION_HEADER: &str = "Bhojpur-Version";

/// Per-call overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Deadline for this call instead of the client default.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Handle to the API. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api_key: SecretString,
    base_url: Url,
    debug: bool,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("debug", &self.inner.debug)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client that talks to the network with `reqwest`.
    ///
    /// # Errors
    ///
    /// `Error::Config` for an empty key, bad base URL or zero timeout;
    /// `Error::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from `BHOJPUR_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::load()?)
    }

    /// Create a client on top of any transport, e.g. [`MockTransport`].
    ///
    /// [`MockTransport`]: crate::adapters::transport::MockTransport
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, Error> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let timeout = config.timeout();

        Ok(Self {
            inner: Arc::new(ClientInner {
                api_key: config.api_key,
                base_url,
                debug: config.debug,
                timeout,
                transport,
            }),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.inner.debug
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Resources
    // ════════════════════════════════════════════════════════════════════════════

    pub fn charges(&self) -> Charges<'_> {
        Charges::new(self)
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn invoice_items(&self) -> InvoiceItems<'_> {
        InvoiceItems::new(self)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Transport
    // ════════════════════════════════════════════════════════════════════════════

    /// Send a request and return the raw 200 response.
    ///
    /// # Errors
    ///
    /// `Error::Transport` when no response arrives, `Error::Api` for any
    /// status other than 200.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<ApiResponse, Error> {
        self.execute_with(method, path, params, RequestOptions::default())
            .await
    }

    /// [`execute`](Self::execute) with per-call options.
    pub async fn execute_with(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error> {
        let encoded = params.encode();
        let request = self.build_request(method, path, params, &encoded, options);

        if self.inner.debug {
            tracing::debug!(
                method = %method,
                url = %request.url,
                params = %encoded,
                "sending request"
            );
        } else {
            tracing::trace!(method = %method, path, "sending request");
        }

        let response = self.inner.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = %method, path, error = %e, "request not delivered");
            e
        })?;

        if self.inner.debug {
            tracing::debug!(
                status = response.status,
                body = %response.text(),
                "received response"
            );
        }

        if response.status != 200 {
            let error = ApiError::from_response(
                response.status,
                &response.body,
                response.request_id.as_deref(),
            );
            tracing::warn!(
                status = error.status,
                error_type = ?error.error_type,
                code = ?error.code,
                request_id = ?error.request_id,
                "API request failed"
            );
            return Err(error.into());
        }

        Ok(response)
    }

    /// Send a request and decode the 200 response body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T, Error> {
        let response = self.execute(method, path, params).await?;
        Self::decode(&response)
    }

    /// [`request`](Self::request) with per-call options.
    pub async fn request_with<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let response = self.execute_with(method, path, params, options).await?;
        Self::decode(&response)
    }

    /// Decode a response body as JSON.
    pub fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, Error> {
        serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            status: response.status,
            source,
        })
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        encoded: &str,
        options: RequestOptions,
    ) -> ApiRequest {
        let mut url = self.inner.base_url.clone();
        url.set_path(path);
        url.set_query(None);

        let body = match method {
            Method::Get => {
                if !params.is_empty() {
                    url.set_query(Some(encoded));
                }
                None
            }
            Method::Post | Method::Delete => Some(encoded.to_string()),
        };

        ApiRequest {
            method,
            url,
            headers: vec![(VERSION_HEADER, API_VERSION.to_string())],
            body,
            api_key: self.inner.api_key.clone(),
            timeout: Some(options.timeout.unwrap_or(self.inner.timeout)),
        }
    }
}
