//! A customer's subscription.

use crate::client::{escape_segment, Client, Params};
use crate::domain::Subscription;
use crate::error::Error;
use crate::ports::Method;

use super::CardParams;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionParams {
    pub plan: String,
    pub coupon: Option<String>,

    /// Prorate charges when switching plans.
    pub prorate: bool,
    pub trial_end: Option<i64>,

    /// Token used in preference to `card`.
    pub token: Option<String>,
    pub card: Option<CardParams>,
    pub quantity: Option<i64>,
}

impl SubscriptionParams {
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            ..Default::default()
        }
    }

    pub fn append_to(&self, params: &mut Params) {
        params
            .push("plan", &self.plan)
            .push_opt("coupon", self.coupon.as_deref())
            .push_opt("prorate", self.prorate.then_some("true"))
            .push_opt("trial_end", self.trial_end)
            .push_opt("quantity", self.quantity);

        if let Some(token) = &self.token {
            params.push("card", token);
        } else if let Some(card) = &self.card {
            card.append_to(params);
        }
    }
}

/// `/v1/customers/{customer}/subscription`
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a Client,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Subscribe the customer to a plan, or change their current plan.
    pub async fn update(
        self,
        customer_id: &str,
        subscription: &SubscriptionParams,
    ) -> Result<Subscription, Error> {
        let mut params = Params::new();
        subscription.append_to(&mut params);

        self.client
            .request(Method::Post, &subscription_path(customer_id), &params)
            .await
    }

    /// Cancel immediately.
    pub async fn cancel(self, customer_id: &str) -> Result<Subscription, Error> {
        self.client
            .request(Method::Delete, &subscription_path(customer_id), &Params::new())
            .await
    }

    /// Cancel when the current billing period ends.
    pub async fn cancel_at_period_end(self, customer_id: &str) -> Result<Subscription, Error> {
        let mut params = Params::new();
        params.push("at_period_end", "true");

        self.client
            .request(Method::Delete, &subscription_path(customer_id), &params)
            .await
    }
}

fn subscription_path(customer_id: &str) -> String {
    format!("/v1/customers/{}/subscription", escape_segment(customer_id))
}
