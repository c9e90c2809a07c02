//! Invoice items: one-off amounts added to a customer's next invoice.

use crate::client::{Client, Params};
use crate::domain::{Currency, InvoiceItem};
use crate::error::Error;
use crate::ports::Method;

use super::{delete, item_path, list, ListParams};

const INVOICE_ITEMS: &str = "/v1/invoiceitems";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceItemParams {
    pub customer: String,

    /// Amount in the smallest currency unit. Negative for a credit.
    pub amount: i64,
    pub currency: Currency,
    pub desc: Option<String>,

    /// Attach to this invoice instead of the upcoming one.
    pub invoice: Option<String>,
}

impl InvoiceItemParams {
    pub fn new(customer: impl Into<String>, amount: i64, currency: Currency) -> Self {
        Self {
            customer: customer.into(),
            amount,
            currency,
            desc: None,
            invoice: None,
        }
    }

    pub fn append_to(&self, params: &mut Params) {
        params
            .push("amount", self.amount)
            .push("currency", self.currency)
            .push("customer", &self.customer)
            .push_opt("description", self.desc.as_deref())
            .push_opt("invoice", self.invoice.as_deref());
    }
}

/// Changes to an existing invoice item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceItemUpdate {
    pub amount: Option<i64>,
    pub desc: Option<String>,
}

impl InvoiceItemUpdate {
    pub fn append_to(&self, params: &mut Params) {
        params
            .push_opt("description", self.desc.as_deref())
            .push_opt("amount", self.amount);
    }
}

/// `/v1/invoiceitems`
#[derive(Debug, Clone, Copy)]
pub struct InvoiceItems<'a> {
    client: &'a Client,
}

impl<'a> InvoiceItems<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(self, item: &InvoiceItemParams) -> Result<InvoiceItem, Error> {
        let mut params = Params::new();
        item.append_to(&mut params);

        self.client
            .request(Method::Post, INVOICE_ITEMS, &params)
            .await
    }

    pub async fn retrieve(self, id: &str) -> Result<InvoiceItem, Error> {
        self.client
            .request(Method::Get, &item_path(INVOICE_ITEMS, id), &Params::new())
            .await
    }

    pub async fn update(self, id: &str, update: &InvoiceItemUpdate) -> Result<InvoiceItem, Error> {
        let mut params = Params::new();
        update.append_to(&mut params);

        self.client
            .request(Method::Post, &item_path(INVOICE_ITEMS, id), &params)
            .await
    }

    pub async fn delete(self, id: &str) -> Result<bool, Error> {
        delete(self.client, &item_path(INVOICE_ITEMS, id)).await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<InvoiceItem>, Error> {
        list(self.client, INVOICE_ITEMS, None, page).await
    }

    pub async fn list_for_customer(
        self,
        customer_id: &str,
        page: ListParams,
    ) -> Result<Vec<InvoiceItem>, Error> {
        list(self.client, INVOICE_ITEMS, Some(customer_id), page).await
    }
}
