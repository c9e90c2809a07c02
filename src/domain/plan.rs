//! Recurring pricing plans.

use serde::{Deserialize, Serialize};

use super::common::Currency;
use super::nullable;

/// Billing frequency of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
    Century,
    #[serde(other)]
    Unknown,
}

impl PlanInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanInterval::Second => "second",
            PlanInterval::Minute => "minute",
            PlanInterval::Hour => "hour",
            PlanInterval::Day => "day",
            PlanInterval::Week => "week",
            PlanInterval::Month => "month",
            PlanInterval::Quarter => "quarter",
            PlanInterval::Year => "year",
            PlanInterval::Decade => "decade",
            PlanInterval::Century => "century",
            PlanInterval::Unknown => "unknown",
        }
    }
}

/// Pricing for a product or feature level, charged on a recurring basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,

    /// Amount in the currency's smallest unit.
    pub amount: i64,

    pub interval: PlanInterval,

    #[serde(default)]
    pub interval_count: i32,

    pub currency: Currency,

    #[serde(default, deserialize_with = "nullable::int")]
    pub trial_period_days: i32,

    #[serde(default)]
    pub livemode: bool,
}
