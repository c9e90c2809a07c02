//! Subscription plans.

use crate::client::{Client, Params};
use crate::domain::{Currency, Plan, PlanInterval};
use crate::error::Error;
use crate::ports::Method;

use super::{delete, item_path, list, ListParams};

const PLANS: &str = "/v1/plans";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanParams {
    pub id: String,
    pub name: String,

    /// Price per interval in the currency's smallest unit.
    pub amount: i64,
    pub interval: PlanInterval,
    pub currency: Currency,
    pub trial_period_days: Option<u32>,
}

impl PlanParams {
    pub fn append_to(&self, params: &mut Params) {
        params
            .push("id", &self.id)
            .push("name", &self.name)
            .push("amount", self.amount)
            .push("interval", self.interval.as_str())
            .push("currency", self.currency)
            .push_opt("trial_period_days", self.trial_period_days);
    }
}

/// `/v1/plans`
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    client: &'a Client,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(self, plan: &PlanParams) -> Result<Plan, Error> {
        let mut params = Params::new();
        plan.append_to(&mut params);

        self.client.request(Method::Post, PLANS, &params).await
    }

    pub async fn retrieve(self, id: &str) -> Result<Plan, Error> {
        self.client
            .request(Method::Get, &item_path(PLANS, id), &Params::new())
            .await
    }

    /// Rename a plan. Price and interval are fixed once created.
    pub async fn update(self, id: &str, name: &str) -> Result<Plan, Error> {
        let mut params = Params::new();
        params.push("name", name);

        self.client
            .request(Method::Post, &item_path(PLANS, id), &params)
            .await
    }

    pub async fn delete(self, id: &str) -> Result<bool, Error> {
        delete(self.client, &item_path(PLANS, id)).await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<Plan>, Error> {
        list(self.client, PLANS, None, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::transport::MockTransport;
    use crate::resources::test_support::client_with;

    const PLAN_JSON: &str = r#"{
        "id": "gold", "name": "Gold", "amount": 99900, "interval": "month",
        "interval_count": 1, "currency": "inr", "trial_period_days": null, "livemode": false
    }"#;

    fn gold() -> PlanParams {
        PlanParams {
            id: "gold".to_string(),
            name: "Gold".to_string(),
            amount: 99900,
            interval: PlanInterval::Month,
            currency: Currency::Inr,
            trial_period_days: None,
        }
    }

    #[test]
    fn plan_params_in_order() {
        let mut params = Params::new();
        gold().append_to(&mut params);

        assert_eq!(
            params.encode(),
            "id=gold&name=Gold&amount=99900&interval=month&currency=inr"
        );
    }

    #[tokio::test]
    async fn create_then_rename() {
        let mock = MockTransport::new();
        mock.push_response(200, PLAN_JSON);
        mock.push_response(200, PLAN_JSON.replace("\"Gold\"", "\"Gold Plus\""));
        let client = client_with(&mock);

        let plan = client.plans().create(&gold()).await.unwrap();
        assert_eq!(plan.trial_period_days, 0);

        let renamed = client.plans().update("gold", "Gold Plus").await.unwrap();
        assert_eq!(renamed.name, "Gold Plus");

        let seen = mock.last_request().unwrap();
        assert_eq!(seen.method, Method::Post);
        assert_eq!(seen.path(), "/v1/plans/gold");
        assert_eq!(seen.body.as_deref(), Some("name=Gold+Plus"));
    }

    #[tokio::test]
    async fn delete_and_list() {
        let mock = MockTransport::new();
        mock.push_response(200, r#"{"id": "gold", "deleted": true}"#);
        mock.push_response(200, format!(r#"{{"data": [{}]}}"#, PLAN_JSON));
        let client = client_with(&mock);

        assert!(client.plans().delete("gold").await.unwrap());
        let plans = client.plans().list(ListParams::default()).await.unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].interval, PlanInterval::Month);
    }
}
