//! Charges against a card, token, or customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::common::{timestamp, Currency};
use super::nullable;

/// A credit card charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,

    #[serde(rename = "description", default, deserialize_with = "nullable::string")]
    pub desc: String,

    /// Amount in the currency's smallest unit.
    pub amount: i64,

    pub card: Option<Card>,
    pub currency: Currency,
    pub created: i64,

    #[serde(default, deserialize_with = "nullable::string")]
    pub customer: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub invoice: String,

    #[serde(default)]
    pub fee: i64,

    pub paid: bool,

    #[serde(rename = "fee_details", default)]
    pub details: Vec<FeeDetails>,

    #[serde(default)]
    pub refunded: bool,

    #[serde(default)]
    pub amount_refunded: i64,

    #[serde(default, deserialize_with = "nullable::string")]
    pub failure_message: String,

    #[serde(default)]
    pub disputed: bool,

    #[serde(default)]
    pub livemode: bool,

    #[serde(default, deserialize_with = "nullable::string")]
    pub statement_description: String,
}

impl Charge {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created)
    }
}

/// A single fee associated with a charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeDetails {
    pub amount: i64,
    pub currency: Currency,
    #[serde(rename = "type")]
    pub fee_type: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub application: String,
}
