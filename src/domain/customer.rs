//! Customers registered with the API.

use serde::{Deserialize, Serialize};

use super::card::CardList;
use super::coupon::Discount;
use super::nullable;
use super::subscription::Subscription;

/// A customer, with their cards and current subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    #[serde(rename = "description", default, deserialize_with = "nullable::string")]
    pub desc: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub email: String,

    pub created: i64,

    /// Starting balance in the currency's smallest unit.
    #[serde(rename = "account_balance", default)]
    pub balance: i64,

    #[serde(default)]
    pub delinquent: bool,

    #[serde(default)]
    pub cards: CardList,

    pub discount: Option<Discount>,
    pub subscription: Option<Subscription>,

    #[serde(default)]
    pub livemode: bool,

    #[serde(default, deserialize_with = "nullable::string")]
    pub default_card: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardNetwork, SubscriptionStatus};

    #[test]
    fn parse_customer_with_cards_and_subscription() {
        let json = r#"{
            "id": "cus_xyz",
            "description": null,
            "email": "pramila@example.com",
            "created": 1704067200,
            "account_balance": 0,
            "delinquent": false,
            "cards": {
                "object": "list",
                "count": 1,
                "url": "/v1/customers/cus_xyz/cards",
                "data": [{
                    "id": "card_1",
                    "type": "MasterCard",
                    "exp_month": 12,
                    "exp_year": 2031,
                    "last4": "4444",
                    "fingerprint": "fp_1"
                }]
            },
            "discount": null,
            "subscription": {
                "customer": "cus_xyz",
                "status": "active",
                "start": 1704067200
            },
            "livemode": false,
            "default_card": "card_1"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.desc, "");
        assert_eq!(customer.email, "pramila@example.com");
        assert_eq!(customer.cards.data[0].network, CardNetwork::MasterCard);
        assert!(customer.discount.is_none());
        assert_eq!(
            customer.subscription.unwrap().status,
            SubscriptionStatus::Active
        );
    }

    #[test]
    fn minimal_customer_uses_defaults() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": "cus_1", "created": 1704067200}"#).unwrap();

        assert!(customer.cards.data.is_empty());
        assert_eq!(customer.default_card, "");
    }
}
