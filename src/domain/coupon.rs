//! Percent-off coupons and their application to customers.

use serde::{Deserialize, Serialize};

use super::nullable;

/// How long a coupon's discount stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    Forever,
    Once,
    /// Applies for `duration_in_months`.
    Repeating,
    #[serde(other)]
    Unknown,
}

impl CouponDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponDuration::Forever => "forever",
            CouponDuration::Once => "once",
            CouponDuration::Repeating => "repeating",
            CouponDuration::Unknown => "unknown",
        }
    }
}

/// A percent-off discount that can be applied to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub duration: CouponDuration,
    pub percent_off: i32,

    #[serde(default, deserialize_with = "nullable::int")]
    pub duration_in_months: i32,

    #[serde(default, deserialize_with = "nullable::int")]
    pub max_redemptions: i32,

    #[serde(default, deserialize_with = "nullable::int64")]
    pub redeem_by: i64,

    #[serde(default)]
    pub times_redeemed: i32,

    #[serde(default)]
    pub livemode: bool,
}

/// A coupon applied to a particular customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: String,
    pub customer: String,

    #[serde(default, deserialize_with = "nullable::int64")]
    pub start: i64,

    #[serde(default, deserialize_with = "nullable::int64")]
    pub end: i64,

    pub coupon: Option<Coupon>,
}
