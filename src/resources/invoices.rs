//! Invoices (read-only).

use crate::client::{Client, Params};
use crate::domain::Invoice;
use crate::error::Error;
use crate::ports::Method;

use super::{item_path, list, ListParams};

const INVOICES: &str = "/v1/invoices";

/// `/v1/invoices`
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a Client,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn retrieve(self, id: &str) -> Result<Invoice, Error> {
        self.client
            .request(Method::Get, &item_path(INVOICES, id), &Params::new())
            .await
    }

    /// The invoice that will be billed to the customer next.
    pub async fn upcoming(self, customer_id: &str) -> Result<Invoice, Error> {
        let mut params = Params::new();
        params.push("customer", customer_id);

        self.client
            .request(Method::Get, "/v1/invoices/upcoming", &params)
            .await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<Invoice>, Error> {
        list(self.client, INVOICES, None, page).await
    }

    pub async fn list_for_customer(
        self,
        customer_id: &str,
        page: ListParams,
    ) -> Result<Vec<Invoice>, Error> {
        list(self.client, INVOICES, Some(customer_id), page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::resources::test_support::client_with;

    const INVOICE_JSON: &str = r#"{
        "id": "in_1", "amount_due": 99900, "attempt_count": 0, "attempted": false,
        "closed": false, "paid": false, "period_end": 1388600000,
        "period_start": 1386000000, "subtotal": 99900, "total": 99900,
        "charge": null, "customer": "cus_1", "date": 1386000000, "discount": null,
        "lines": {"invoiceitems": [], "prorations": [], "subscriptions": [
            {"amount": 99900, "period": {"start": 1386000000, "end": 1388600000}}
        ]},
        "starting_balance": 0, "ending_balance": null,
        "next_payment_attempt": 1386003600, "livemode": false
    }"#;

    #[tokio::test]
    async fn upcoming_queries_by_customer() {
        let mock = MockTransport::new();
        mock.push_response(200, INVOICE_JSON);
        let client = client_with(&mock);

        let invoice = client.invoices().upcoming("cus_1").await.unwrap();

        assert_eq!(invoice.charge, "");
        assert_eq!(invoice.ending_balance, None);
        assert_eq!(invoice.lines.unwrap().subscriptions.len(), 1);
        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Get);
        assert_eq!(seen.url.as_str(), "https://api.test/v1/invoices/upcoming?customer=cus_1");
    }

    #[tokio::test]
    async fn retrieve_and_lists() {
        let mock = MockTransport::new();
        mock.push_response(200, INVOICE_JSON);
        mock.push_response(200, format!(r#"{{"data": [{}]}}"#, INVOICE_JSON));
        mock.push_response(200, r#"{"data": []}"#);
        let client = client_with(&mock);

        client.invoices().retrieve("in_1").await.unwrap();
        let all = client.invoices().list(ListParams::default()).await.unwrap();
        let mine = client
            .invoices()
            .list_for_customer("cus_2", ListParams::default())
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert!(mine.is_empty());
        let requests = mock.requests();
        assert_eq!(requests[0].path(), "/v1/invoices/in_1");
        assert_eq!(requests[1].url.query(), Some("count=10&offset=0"));
        assert_eq!(
            requests[2].url.query(),
            Some("count=10&offset=0&customer=cus_2")
        );
    }
}
