//! Domain layer: resource models, API errors, and offline card checks.
//!
//! Everything here is pure. Models decode from the API's JSON with serde;
//! fields the API may send as `null` use the rules in [`nullable`].

pub mod api_error;
pub mod card;
pub mod charge;
pub mod common;
pub mod coupon;
pub mod customer;
pub mod invoice;
pub mod nullable;
pub mod plan;
pub mod subscription;
pub mod token;

pub use api_error::{ApiError, ErrorCode, ErrorType};
pub use card::{
    check_digit, classify_network, validate_checksum, Card, CardList, CardNetwork,
    CardNumberError,
};
pub use charge::{Charge, FeeDetails};
pub use common::{Currency, DeleteResponse, ListResponse};
pub use coupon::{Coupon, CouponDuration, Discount};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceItem, InvoiceLines, Period, SubscriptionItem};
pub use plan::{Plan, PlanInterval};
pub use subscription::{Subscription, SubscriptionStatus};
pub use token::Token;
