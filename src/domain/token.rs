//! Single-use card tokens.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::common::Currency;

/// Stand-in for card details that can be stored without holding the card
/// number. A token can be used once: to create a charge or to attach the
/// card to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,

    #[serde(default)]
    pub amount: i64,

    pub currency: Option<Currency>,
    pub created: i64,

    #[serde(default)]
    pub used: bool,

    #[serde(default)]
    pub livemode: bool,

    #[serde(rename = "type", default)]
    pub token_type: String,

    pub card: Option<Card>,
}
