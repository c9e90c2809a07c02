//! Subscription Client - typed access to the Bhojpur subscription and
//! payments REST API.
//!
//! The crate covers charges, customers, cards, coupons, plans,
//! subscriptions, invoices, invoice items and tokens, plus offline card
//! number checks (Luhn checksum and network classification).
//!
//! ```no_run
//! use subscription_client::config::ClientConfig;
//! use subscription_client::domain::Currency;
//! use subscription_client::resources::ChargeParams;
//! use subscription_client::Client;
//!
//! # async fn run() -> Result<(), subscription_client::Error> {
//! let client = Client::new(ClientConfig::new("sk_test_..."))?;
//! let charge = client
//!     .charges()
//!     .create(&ChargeParams::new(400, Currency::Inr).with_token("tok_visa"))
//!     .await?;
//! println!("charged {} {}", charge.amount, charge.currency);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod blocking;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod resources;

pub use client::{Client, Params, RequestOptions};
pub use error::Error;
