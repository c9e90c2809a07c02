//! A customer's recurring subscription to a plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;
use super::nullable;
use super::plan::Plan;

/// Subscription status reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is in its trial period.
    Trialing,

    /// Subscription is active and current.
    Active,

    /// Latest payment failed; the API is still retrying.
    PastDue,

    /// Subscription was canceled.
    Canceled,

    /// Retries were exhausted without payment.
    Unpaid,

    /// Unknown status from the API.
    #[serde(other)]
    Unknown,
}

/// Recurring charge against a customer's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub customer: String,
    pub status: SubscriptionStatus,
    pub plan: Option<Plan>,
    pub start: i64,

    pub ended_at: Option<i64>,

    #[serde(default, deserialize_with = "nullable::int64")]
    pub current_period_start: i64,

    #[serde(default, deserialize_with = "nullable::int64")]
    pub current_period_end: i64,

    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub canceled_at: Option<i64>,

    #[serde(default)]
    pub cancel_at_period_end: bool,

    #[serde(default)]
    pub quantity: i64,
}

impl Subscription {
    /// End of the current billing period, if the API reported one.
    pub fn current_period_ends_at(&self) -> Option<DateTime<Utc>> {
        match self.current_period_end {
            0 => None,
            secs => timestamp(secs),
        }
    }

    /// End of the trial, if the subscription has or had one.
    pub fn trial_ends_at(&self) -> Option<DateTime<Utc>> {
        self.trial_end.and_then(timestamp)
    }
}
