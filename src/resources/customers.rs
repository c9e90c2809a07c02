//! Customers.

use std::collections::BTreeMap;

use crate::client::{Client, Params};
use crate::domain::Customer;
use crate::error::Error;
use crate::ports::Method;

use super::{delete, item_path, list, CardParams, ListParams};

const CUSTOMERS: &str = "/v1/customers";

/// Fields for creating or updating a customer. Unset fields are not sent,
/// so an update only touches what is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerParams {
    pub email: Option<String>,
    pub desc: Option<String>,
    pub card: Option<CardParams>,

    /// Token used when `card` is not set.
    pub token: Option<String>,
    pub coupon: Option<String>,
    pub plan: Option<String>,

    /// End of the trial as a Unix timestamp.
    pub trial_end: Option<i64>,
    pub account_balance: Option<i64>,
    pub quantity: Option<i64>,

    /// Sent as `metadata[key]` pairs, in key order.
    pub metadata: BTreeMap<String, String>,
}

impl CustomerParams {
    pub fn append_to(&self, params: &mut Params) {
        params
            .push_opt("email", self.email.as_deref())
            .push_opt("description", self.desc.as_deref())
            .push_opt("coupon", self.coupon.as_deref())
            .push_opt("plan", self.plan.as_deref())
            .push_opt("trial_end", self.trial_end)
            .push_opt("account_balance", self.account_balance)
            .push_opt("quantity", self.quantity);

        for (key, value) in &self.metadata {
            params.push(format!("metadata[{}]", key), value);
        }

        if let Some(card) = &self.card {
            card.append_to(params);
        } else if let Some(token) = &self.token {
            params.push("card", token);
        }
    }
}

/// `/v1/customers`
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a Client,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(self, customer: &CustomerParams) -> Result<Customer, Error> {
        let mut params = Params::new();
        customer.append_to(&mut params);

        self.client.request(Method::Post, CUSTOMERS, &params).await
    }

    pub async fn retrieve(self, id: &str) -> Result<Customer, Error> {
        self.client
            .request(Method::Get, &item_path(CUSTOMERS, id), &Params::new())
            .await
    }

    pub async fn update(self, id: &str, customer: &CustomerParams) -> Result<Customer, Error> {
        let mut params = Params::new();
        customer.append_to(&mut params);

        self.client
            .request(Method::Post, &item_path(CUSTOMERS, id), &params)
            .await
    }

    /// Delete a customer. Returns whether the API reported it deleted.
    pub async fn delete(self, id: &str) -> Result<bool, Error> {
        delete(self.client, &item_path(CUSTOMERS, id)).await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<Customer>, Error> {
        list(self.client, CUSTOMERS, None, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::resources::test_support::client_with;

    const CUSTOMER_JSON: &str = r#"{
        "id": "cus_1", "email": "ada@example.com", "description": null,
        "created": 1386000000, "livemode": false,
        "cards": {"object": "list", "count": 0, "url": "/v1/customers/cus_1/cards", "data": []},
        "discount": null, "subscription": null, "default_card": null
    }"#;

    #[test]
    fn only_set_fields_are_sent() {
        let customer = CustomerParams {
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        };

        let mut params = Params::new();
        customer.append_to(&mut params);

        assert_eq!(params.encode(), "email=ada%40example.com");
    }

    #[test]
    fn metadata_and_token() {
        let mut customer = CustomerParams {
            token: Some("tok_1".to_string()),
            plan: Some("gold".to_string()),
            trial_end: Some(1_700_000_000),
            ..Default::default()
        };
        customer.metadata.insert("user_id".to_string(), "42".to_string());
        customer.metadata.insert("tier".to_string(), "pro".to_string());

        let mut params = Params::new();
        customer.append_to(&mut params);

        assert_eq!(
            params.encode(),
            "plan=gold&trial_end=1700000000&metadata%5Btier%5D=pro&metadata%5Buser_id%5D=42&card=tok_1"
        );
    }

    #[tokio::test]
    async fn create_and_retrieve() {
        let mock = MockTransport::new();
        mock.push_response(200, CUSTOMER_JSON);
        mock.push_response(200, CUSTOMER_JSON);
        let client = client_with(&mock);

        let created = client
            .customers()
            .create(&CustomerParams {
                email: Some("ada@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let fetched = client.customers().retrieve("cus_1").await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.desc, "");
        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path(), "/v1/customers");
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].path(), "/v1/customers/cus_1");
    }

    #[tokio::test]
    async fn update_posts_to_item() {
        let mock = MockTransport::new();
        mock.push_response(200, CUSTOMER_JSON);
        let client = client_with(&mock);

        client
            .customers()
            .update(
                "cus_1",
                &CustomerParams {
                    desc: Some("VIP".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Post);
        assert_eq!(seen.path(), "/v1/customers/cus_1");
        assert_eq!(seen.body.as_deref(), Some("description=VIP"));
    }

    #[tokio::test]
    async fn delete_returns_flag() {
        let mock = MockTransport::new();
        mock.push_response(200, r#"{"id": "cus_1", "deleted": true}"#);
        let client = client_with(&mock);

        assert!(client.customers().delete("cus_1").await.unwrap());
        assert_eq!(mock.last_request().unwrap().method, Method::Delete);
    }

    #[tokio::test]
    async fn missing_customer_is_api_error() {
        let mock = MockTransport::new();
        mock.push_response(
            404,
            r#"{"error": {"type": "invalid_request_error", "message": "No such customer: cus_x", "param": "id"}}"#,
        );
        let client = client_with(&mock);

        let err = client.customers().retrieve("cus_x").await.unwrap_err();

        let api = err.as_api_error().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.param.as_deref(), Some("id"));
    }

    #[tokio::test]
    async fn list_uses_page() {
        let mock = MockTransport::new();
        mock.push_response(200, r#"{"data": []}"#);
        let client = client_with(&mock);

        let customers = client.customers().list(ListParams::default()).await.unwrap();

        assert!(customers.is_empty());
        assert_eq!(
            mock.last_request().unwrap().url.query(),
            Some("count=10&offset=0")
        );
    }
}
