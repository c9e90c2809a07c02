//! Typed calls for each API resource.
//!
//! Every handle borrows a [`Client`] and maps one method to one HTTP call.
//! Parameter structs append their fields to a [`Params`] in the order and
//! key names the API expects; unset optional fields are left out.

mod cards;
mod charges;
mod coupons;
mod customers;
mod invoice_items;
mod invoices;
mod plans;
mod subscriptions;
mod tokens;

pub use cards::{CardParams, Cards};
pub use charges::{ChargeParams, Charges};
pub use coupons::{CouponParams, Coupons};
pub use customers::{CustomerParams, Customers};
pub use invoice_items::{InvoiceItemParams, InvoiceItemUpdate, InvoiceItems};
pub use invoices::Invoices;
pub use plans::{PlanParams, Plans};
pub use subscriptions::{SubscriptionParams, Subscriptions};
pub use tokens::Tokens;

use serde::de::DeserializeOwned;

use crate::client::{escape_segment, Client, Params};
use crate::domain::{DeleteResponse, ListResponse};
use crate::error::Error;
use crate::ports::Method;

/// Page selection for list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of objects to return.
    pub count: u32,

    /// Number of objects to skip.
    pub offset: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            count: 10,
            offset: 0,
        }
    }
}

impl ListParams {
    pub fn new(count: u32, offset: u32) -> Self {
        Self { count, offset }
    }

    pub fn append_to(&self, params: &mut Params) {
        params.push("count", self.count).push("offset", self.offset);
    }
}

/// `{collection}/{escaped id}`
fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, escape_segment(id))
}

/// GET a list endpoint and unwrap its `data` array.
async fn list<T: DeserializeOwned>(
    client: &Client,
    path: &str,
    customer: Option<&str>,
    page: ListParams,
) -> Result<Vec<T>, Error> {
    let mut params = Params::new();
    page.append_to(&mut params);
    params.push_opt("customer", customer);

    let response: ListResponse<T> = client.request(Method::Get, path, &params).await?;
    Ok(response.data)
}

/// DELETE an object and report whether the API deleted it.
async fn delete(client: &Client, path: &str) -> Result<bool, Error> {
    let response: DeleteResponse = client
        .request(Method::Delete, path, &Params::new())
        .await?;
    Ok(response.deleted)
}
