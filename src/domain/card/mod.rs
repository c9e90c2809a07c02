//! Credit cards: the stored card model plus offline number checks.
//!
//! [`validate_checksum`] and [`classify_network`] are pure and independent of
//! each other. Callers typically run both before submitting a number.

mod luhn;
mod network;

pub use luhn::{check_digit, validate_checksum, CardNumberError};
pub use network::{classify_network, CardNetwork};

use serde::{Deserialize, Serialize};

use super::nullable;

/// A credit card attached to a customer or token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub name: String,

    #[serde(rename = "type")]
    pub network: CardNetwork,

    pub exp_month: i32,
    pub exp_year: i32,
    pub last4: String,
    pub fingerprint: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub country: String,

    #[serde(rename = "address_line1", default, deserialize_with = "nullable::string")]
    pub address1: String,

    #[serde(rename = "address_line2", default, deserialize_with = "nullable::string")]
    pub address2: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub address_country: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub address_state: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub address_pin: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub address_city: String,

    /// Result of the address line 1 check (`pass`, `fail`, `unchecked`).
    #[serde(default, deserialize_with = "nullable::string")]
    pub address_line1_check: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub address_pin_check: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub cvc_check: String,
}

/// Cards embedded in a customer object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub data: Vec<Card>,
}
