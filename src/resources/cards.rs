//! Cards stored on a customer.

use std::fmt;

use crate::client::{escape_segment, Client, Params};
use crate::domain::{Card, DeleteResponse};
use crate::error::Error;
use crate::ports::Method;

/// Card details sent when charging, tokenizing or saving a card.
///
/// `Debug` output masks the number and omits the CVC.
#[derive(Clone, PartialEq, Eq)]
pub struct CardParams {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: i32,
    pub name: Option<String>,
    pub cvc: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address_country: Option<String>,
    pub address_state: Option<String>,
    pub address_pin: Option<String>,
}

impl CardParams {
    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: i32) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            name: None,
            cvc: None,
            address1: None,
            address2: None,
            address_country: None,
            address_state: None,
            address_pin: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Append as `card[...]` pairs.
    pub fn append_to(&self, params: &mut Params) {
        params
            .push("card[number]", &self.number)
            .push("card[exp_month]", self.exp_month)
            .push("card[exp_year]", self.exp_year)
            .push_opt("card[name]", self.name.as_deref())
            .push_opt("card[cvc]", self.cvc.as_deref())
            .push_opt("card[address_line1]", self.address1.as_deref())
            .push_opt("card[address_line2]", self.address2.as_deref())
            .push_opt("card[address_pin]", self.address_pin.as_deref())
            .push_opt("card[address_state]", self.address_state.as_deref())
            .push_opt("card[address_country]", self.address_country.as_deref());
    }

    fn masked_number(&self) -> String {
        let last4: String = {
            let chars: Vec<char> = self.number.chars().collect();
            chars[chars.len().saturating_sub(4)..].iter().collect()
        };
        format!("****{}", last4)
    }
}

impl fmt::Debug for CardParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardParams")
            .field("number", &self.masked_number())
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// `/v1/customers/{customer}/cards`
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    client: &'a Client,
}

impl<'a> Cards<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Save a card on a customer.
    pub async fn create(self, customer_id: &str, card: &CardParams) -> Result<Card, Error> {
        let mut params = Params::new();
        card.append_to(&mut params);

        self.client
            .request(Method::Post, &cards_path(customer_id), &params)
            .await
    }

    /// Remove a card from a customer.
    pub async fn delete(self, customer_id: &str, card_id: &str) -> Result<DeleteResponse, Error> {
        let path = format!("{}/{}", cards_path(customer_id), escape_segment(card_id));

        self.client
            .request(Method::Delete, &path, &Params::new())
            .await
    }
}

fn cards_path(customer_id: &str) -> String {
    format!("/v1/customers/{}/cards", escape_segment(customer_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::domain::CardNetwork;
    use crate::resources::test_support::client_with;

    #[test]
    fn required_fields_always_sent() {
        let mut params = Params::new();
        CardParams::new("4242424242424242", 12, 2030).append_to(&mut params);

        assert_eq!(
            params.encode(),
            "card%5Bnumber%5D=4242424242424242&card%5Bexp_month%5D=12&card%5Bexp_year%5D=2030"
        );
    }

    #[test]
    fn optional_fields_sent_when_set() {
        let mut card = CardParams::new("4242424242424242", 1, 2031)
            .with_name("Ada Lovelace")
            .with_cvc("123");
        card.address_pin = Some("560001".to_string());

        let mut params = Params::new();
        card.append_to(&mut params);

        assert_eq!(params.get("card[name]"), Some("Ada Lovelace"));
        assert_eq!(params.get("card[cvc]"), Some("123"));
        assert_eq!(params.get("card[address_pin]"), Some("560001"));
        assert_eq!(params.get("card[address_line1]"), None);
    }

    #[test]
    fn debug_masks_number_and_cvc() {
        let card = CardParams::new("4242424242424242", 12, 2030).with_cvc("987");
        let printed = format!("{:?}", card);

        assert!(printed.contains("****4242"));
        assert!(!printed.contains("4242424242424242"));
        assert!(!printed.contains("987"));
    }

    #[tokio::test]
    async fn create_posts_card_to_customer() {
        let mock = MockTransport::new();
        mock.push_response(
            200,
            r#"{"id": "card_1", "type": "Visa", "exp_month": 12, "exp_year": 2030,
                "last4": "4242", "fingerprint": "fp_1", "cvc_check": null}"#,
        );
        let client = client_with(&mock);

        let card = client
            .cards()
            .create("cus_1", &CardParams::new("4242424242424242", 12, 2030))
            .await
            .unwrap();

        assert_eq!(card.network, CardNetwork::Visa);
        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Post);
        assert_eq!(seen.path(), "/v1/customers/cus_1/cards");
        assert_eq!(seen.param("card[number]").as_deref(), Some("4242424242424242"));
    }

    #[tokio::test]
    async fn delete_returns_response() {
        let mock = MockTransport::new();
        mock.push_response(200, r#"{"id": "card_1", "deleted": true}"#);
        let client = client_with(&mock);

        let resp = client.cards().delete("cus_1", "card_1").await.unwrap();

        assert_eq!(resp.id, "card_1");
        assert!(resp.deleted);
        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Delete);
        assert_eq!(seen.path(), "/v1/customers/cus_1/cards/card_1");
    }
}
