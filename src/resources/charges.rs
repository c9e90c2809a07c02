//! Charges: one-off payments against a card, token or customer.

use crate::client::{Client, Params};
use crate::domain::{Charge, Currency};
use crate::error::Error;
use crate::ports::Method;

use super::{item_path, list, CardParams, ListParams};

const CHARGES: &str = "/v1/charges";

/// What to charge. The payment source is the card if set, otherwise the
/// token, otherwise the customer's default card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeParams {
    /// Amount in the currency's smallest unit.
    pub amount: i64,
    pub currency: Currency,
    pub customer: Option<String>,
    pub card: Option<CardParams>,
    pub token: Option<String>,
    pub desc: Option<String>,

    /// Text shown on the cardholder's statement.
    pub statement_description: Option<String>,
}

impl ChargeParams {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            customer: None,
            card: None,
            token: None,
            desc: None,
            statement_description: None,
        }
    }

    pub fn with_card(mut self, card: CardParams) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn append_to(&self, params: &mut Params) {
        params
            .push("amount", self.amount)
            .push("currency", self.currency)
            .push_opt("description", self.desc.as_deref());

        if let Some(card) = &self.card {
            card.append_to(params);
        } else if let Some(token) = &self.token {
            params.push("card", token);
        } else {
            params.push_opt("customer", self.customer.as_deref());
        }

        params.push_opt("statement_description", self.statement_description.as_deref());
    }
}

/// `/v1/charges`
#[derive(Debug, Clone, Copy)]
pub struct Charges<'a> {
    client: &'a Client,
}

impl<'a> Charges<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Charge a card, token or customer.
    pub async fn create(self, charge: &ChargeParams) -> Result<Charge, Error> {
        let mut params = Params::new();
        charge.append_to(&mut params);

        self.client.request(Method::Post, CHARGES, &params).await
    }

    pub async fn retrieve(self, id: &str) -> Result<Charge, Error> {
        self.client
            .request(Method::Get, &item_path(CHARGES, id), &Params::new())
            .await
    }

    /// Refund the full amount.
    pub async fn refund(self, id: &str) -> Result<Charge, Error> {
        self.client
            .request(Method::Post, &refund_path(id), &Params::new())
            .await
    }

    /// Refund part of the amount.
    pub async fn refund_amount(self, id: &str, amount: i64) -> Result<Charge, Error> {
        let mut params = Params::new();
        params.push("amount", amount);

        self.client
            .request(Method::Post, &refund_path(id), &params)
            .await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<Charge>, Error> {
        list(self.client, CHARGES, None, page).await
    }

    /// Charges made against one customer.
    pub async fn list_for_customer(
        self,
        customer_id: &str,
        page: ListParams,
    ) -> Result<Vec<Charge>, Error> {
        list(self.client, CHARGES, Some(customer_id), page).await
    }
}

fn refund_path(id: &str) -> String {
    format!("{}/refund", item_path(CHARGES, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::resources::test_support::client_with;

    const CHARGE_JSON: &str = r#"{
        "id": "ch_1", "amount": 400, "currency": "inr", "created": 1386000000,
        "paid": true, "refunded": false, "livemode": false, "description": null
    }"#;

    #[test]
    fn card_takes_precedence_over_token_and_customer() {
        let charge = ChargeParams::new(400, Currency::Inr)
            .with_card(CardParams::new("4242424242424242", 12, 2030))
            .with_token("tok_1")
            .with_customer("cus_1");

        let mut params = Params::new();
        charge.append_to(&mut params);

        assert_eq!(params.get("card[number]"), Some("4242424242424242"));
        assert_eq!(params.get("card"), None);
        assert_eq!(params.get("customer"), None);
    }

    #[test]
    fn token_sent_as_card_when_no_card_details() {
        let charge = ChargeParams::new(400, Currency::Inr)
            .with_token("tok_1")
            .with_customer("cus_1");

        let mut params = Params::new();
        charge.append_to(&mut params);

        assert_eq!(params.encode(), "amount=400&currency=inr&card=tok_1");
    }

    #[test]
    fn customer_used_as_fallback() {
        let mut charge = ChargeParams::new(1000, Currency::Usd)
            .with_customer("cus_1")
            .with_desc("Monthly fee");
        charge.statement_description = Some("ACME".to_string());

        let mut params = Params::new();
        charge.append_to(&mut params);

        assert_eq!(
            params.encode(),
            "amount=1000&currency=usd&description=Monthly+fee&customer=cus_1&statement_description=ACME"
        );
    }

    #[tokio::test]
    async fn create_posts_params() {
        let mock = MockTransport::new();
        mock.push_response(200, CHARGE_JSON);
        let client = client_with(&mock);

        let charge = client
            .charges()
            .create(&ChargeParams::new(400, Currency::Inr).with_token("tok_1"))
            .await
            .unwrap();

        assert_eq!(charge.id, "ch_1");
        assert_eq!(charge.desc, "");
        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Post);
        assert_eq!(seen.path(), "/v1/charges");
        assert_eq!(seen.param("amount").as_deref(), Some("400"));
    }

    #[tokio::test]
    async fn retrieve_escapes_id() {
        let mock = MockTransport::new();
        mock.push_response(200, CHARGE_JSON);
        let client = client_with(&mock);

        client.charges().retrieve("ch 1").await.unwrap();

        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Get);
        assert_eq!(seen.url.path(), "/v1/charges/ch+1");
    }

    #[tokio::test]
    async fn refunds_post_to_refund_path() {
        let mock = MockTransport::new();
        mock.push_response(200, CHARGE_JSON);
        mock.push_response(200, CHARGE_JSON);
        let client = client_with(&mock);

        client.charges().refund("ch_1").await.unwrap();
        client.charges().refund_amount("ch_1", 150).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path(), "/v1/charges/ch_1/refund");
        assert_eq!(requests[0].body.as_deref(), Some(""));
        assert_eq!(requests[1].path(), "/v1/charges/ch_1/refund");
        assert_eq!(requests[1].param("amount").as_deref(), Some("150"));
    }

    #[tokio::test]
    async fn list_for_customer_adds_customer() {
        let mock = MockTransport::new();
        mock.push_response(200, format!(r#"{{"data": [{}]}}"#, CHARGE_JSON));
        let client = client_with(&mock);

        let charges = client
            .charges()
            .list_for_customer("cus_1", ListParams::new(5, 10))
            .await
            .unwrap();

        assert_eq!(charges.len(), 1);
        let seen = mock.last_request().unwrap();
        assert_eq!(
            seen.url.as_str(),
            "https://api.test/v1/charges?count=5&offset=10&customer=cus_1"
        );
    }
}
