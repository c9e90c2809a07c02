//! Shapes shared by several resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ISO currency codes for the major currencies the API settles in.
///
/// Amounts are always integers in the currency's smallest unit (paisa,
/// cents, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Indian Rupee (₹)
    Inr,
    /// US Dollar ($)
    Usd,
    /// Euro (€)
    Eur,
    /// British Pound Sterling (UK£)
    Gbp,
    /// Japanese Yen (¥)
    Jpy,
    /// Canadian Dollar (CA$)
    Cad,
    /// Hong Kong Dollar (HK$)
    Hkd,
    /// Chinese Yuan (CN¥)
    Cny,
    /// Australian Dollar (A$)
    Aud,
    /// A code this client does not model.
    #[serde(other)]
    Unknown,
}

impl Currency {
    /// Lowercase ISO code as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Inr => "inr",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Jpy => "jpy",
            Currency::Cad => "cad",
            Currency::Hkd => "hkd",
            Currency::Cny => "cny",
            Currency::Aud => "aud",
            Currency::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response to a deletion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// ID of the object that was deleted.
    pub id: String,

    /// Whether the object was deleted.
    pub deleted: bool,
}

/// Envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Convert a Unix timestamp from the API into a UTC date-time.
///
/// Returns `None` for timestamps outside chrono's supported range.
pub fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
