//! Decode rules for scalar fields the API may send as JSON `null`.
//!
//! Attach one of these with `#[serde(default, deserialize_with = "...")]` to a
//! field whose remote contract allows `null`. A `null` decodes to the type's
//! zero value; anything else is decoded with the primitive's normal rule, so a
//! malformed value is still a decode error. Fields without one of these rules
//! keep serde's strict behavior and reject `null`.
//!
//! ```
//! use serde::Deserialize;
//! use subscription_client::domain::nullable;
//!
//! #[derive(Deserialize)]
//! struct Plan {
//!     #[serde(default, deserialize_with = "nullable::int")]
//!     trial_period_days: i32,
//! }
//!
//! let plan: Plan = serde_json::from_str(r#"{"trial_period_days": null}"#).unwrap();
//! assert_eq!(plan.trial_period_days, 0);
//! ```

use serde::{Deserialize, Deserializer};

/// Decode `T`, mapping a JSON `null` to `T::default()`.
pub fn zero_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nullable 32-bit integer.
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    zero_if_null(deserializer)
}

/// Nullable 64-bit integer.
pub fn int64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    zero_if_null(deserializer)
}

/// Nullable boolean.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    zero_if_null(deserializer)
}

/// Nullable string. `null` becomes the empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    zero_if_null(deserializer)
}
