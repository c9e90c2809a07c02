//! Coupons.

use crate::client::{Client, Params};
use crate::domain::{Coupon, CouponDuration};
use crate::error::Error;
use crate::ports::Method;

use super::{delete, item_path, list, ListParams};

const COUPONS: &str = "/v1/coupons";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponParams {
    /// Coupon code; generated by the API when unset.
    pub id: Option<String>,
    pub percent_off: u32,
    pub duration: CouponDuration,

    /// Required when `duration` is `repeating`.
    pub duration_in_months: Option<u32>,
    pub max_redemptions: Option<u32>,

    /// Last Unix timestamp at which the coupon can be redeemed.
    pub redeem_by: Option<i64>,
}

impl CouponParams {
    pub fn new(percent_off: u32, duration: CouponDuration) -> Self {
        Self {
            id: None,
            percent_off,
            duration,
            duration_in_months: None,
            max_redemptions: None,
            redeem_by: None,
        }
    }

    pub fn append_to(&self, params: &mut Params) {
        params
            .push("duration", self.duration.as_str())
            .push("percent_off", self.percent_off)
            .push_opt("id", self.id.as_deref())
            .push_opt("duration_in_months", self.duration_in_months)
            .push_opt("max_redemptions", self.max_redemptions)
            .push_opt("redeem_by", self.redeem_by);
    }
}

/// `/v1/coupons`
#[derive(Debug, Clone, Copy)]
pub struct Coupons<'a> {
    client: &'a Client,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(self, coupon: &CouponParams) -> Result<Coupon, Error> {
        let mut params = Params::new();
        coupon.append_to(&mut params);

        self.client.request(Method::Post, COUPONS, &params).await
    }

    pub async fn retrieve(self, id: &str) -> Result<Coupon, Error> {
        self.client
            .request(Method::Get, &item_path(COUPONS, id), &Params::new())
            .await
    }

    pub async fn delete(self, id: &str) -> Result<bool, Error> {
        delete(self.client, &item_path(COUPONS, id)).await
    }

    pub async fn list(self, page: ListParams) -> Result<Vec<Coupon>, Error> {
        list(self.client, COUPONS, None, page).await
    }
}
