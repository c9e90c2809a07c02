//! Invoices and invoice items.

use serde::{Deserialize, Serialize};

use super::common::Currency;
use super::coupon::Discount;
use super::nullable;
use super::plan::Plan;

/// What a customer owes for a billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub amount_due: i64,

    #[serde(default)]
    pub attempt_count: i32,

    #[serde(default)]
    pub attempted: bool,

    #[serde(default)]
    pub closed: bool,

    pub paid: bool,
    pub period_end: i64,
    pub period_start: i64,
    pub subtotal: i64,
    pub total: i64,

    #[serde(default, deserialize_with = "nullable::string")]
    pub charge: String,

    pub customer: String,
    pub date: i64,
    pub discount: Option<Discount>,
    pub lines: Option<InvoiceLines>,

    #[serde(default)]
    pub starting_balance: i64,

    #[serde(default)]
    pub ending_balance: Option<i64>,

    pub next_payment_attempt: Option<i64>,

    #[serde(default)]
    pub livemode: bool,
}

/// Line items of an invoice, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLines {
    #[serde(rename = "invoiceitems", default)]
    pub invoice_items: Vec<InvoiceItem>,

    #[serde(default)]
    pub prorations: Vec<InvoiceItem>,

    #[serde(default)]
    pub subscriptions: Vec<SubscriptionItem>,
}

/// Subscription line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    pub amount: i64,
    pub period: Option<Period>,
    pub plan: Option<Plan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: i64,
    pub end: i64,
}

/// A charge (or credit) applied to the customer at the end of a billing cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: String,

    /// Negative amounts are credits.
    pub amount: i64,

    pub currency: Currency,
    pub customer: String,
    pub date: i64,

    #[serde(rename = "description", default, deserialize_with = "nullable::string")]
    pub desc: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub invoice: String,

    #[serde(default)]
    pub livemode: bool,
}
