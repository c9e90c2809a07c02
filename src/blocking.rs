//! Synchronous facade over the async [`Client`](crate::client::Client).
//!
//! Each call drives the async client to completion on a private
//! current-thread Tokio runtime. Calling it from inside another runtime
//! panics, so async code should use the async client directly.
//!
//! ```no_run
//! use subscription_client::blocking::Client;
//! use subscription_client::config::ClientConfig;
//!
//! let client = Client::new(ClientConfig::new("sk_test_..."))?;
//! let charge = client.run(|c| c.charges().retrieve("ch_1"))?;
//! println!("{} {}", charge.amount, charge.currency);
//! # Ok::<(), subscription_client::Error>(())
//! ```

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::client::{self, Params};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::ports::{ApiResponse, HttpTransport, Method, TransportError};

/// Blocking API client.
#[derive(Debug)]
pub struct Client {
    inner: client::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client that talks to the network.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            inner: client::Client::new(config)?,
            runtime: build_runtime()?,
        })
    }

    /// Create a blocking client from `BHOJPUR_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::load()?)
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: client::Client::with_transport(config, transport)?,
            runtime: build_runtime()?,
        })
    }

    /// The async client this facade drives.
    pub fn as_async(&self) -> &client::Client {
        &self.inner
    }

    /// Run any async client call to completion.
    pub fn run<'c, F, Fut, T>(&'c self, call: F) -> Result<T, Error>
    where
        F: FnOnce(&'c client::Client) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        self.runtime.block_on(call(&self.inner))
    }

    /// Blocking [`execute`](crate::client::Client::execute).
    pub fn execute(&self, method: Method, path: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.runtime
            .block_on(self.inner.execute(method, path, params))
    }

    /// Blocking [`request`](crate::client::Client::request).
    pub fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T, Error> {
        self.runtime
            .block_on(self.inner.request(method, path, params))
    }
}

fn build_runtime() -> Result<Runtime, Error> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Transport(TransportError::Other(format!("create Tokio runtime: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::domain::Plan;

    fn blocking_client(mock: &MockTransport) -> Client {
        Client::with_transport(
            ClientConfig::new("sk_test_blocking").with_base_url("https://api.test"),
            Arc::new(mock.clone()),
        )
        .unwrap()
    }

    #[test]
    fn run_drives_resource_calls() {
        let mock = MockTransport::new();
        mock.push_response(
            200,
            r#"{"id": "gold", "name": "Gold", "amount": 99900, "interval": "month", "currency": "inr"}"#,
        );
        let client = blocking_client(&mock);

        let plan = client.run(|c| c.plans().retrieve("gold")).unwrap();

        assert_eq!(plan.name, "Gold");
        assert_eq!(mock.last_request().unwrap().path(), "/v1/plans/gold");
    }

    #[test]
    fn request_decodes() {
        let mock = MockTransport::new();
        mock.push_response(
            200,
            r#"{"id": "gold", "name": "Gold", "amount": 99900, "interval": "month", "currency": "inr"}"#,
        );
        let client = blocking_client(&mock);

        let plan: Plan = client
            .request(Method::Get, "/v1/plans/gold", &Params::new())
            .unwrap();

        assert_eq!(plan.amount, 99900);
    }

    #[test]
    fn execute_surfaces_api_errors() {
        let mock = MockTransport::new();
        mock.push_response(402, r#"{"error": {"type": "card_error", "code": "card_declined"}}"#);
        let client = blocking_client(&mock);

        let err = client
            .execute(Method::Post, "/v1/charges", &Params::new())
            .unwrap_err();

        assert!(err.as_api_error().unwrap().is_declined());
    }

    #[test]
    fn new_validates_config() {
        let result = Client::new(ClientConfig::new(""));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
