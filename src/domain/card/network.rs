//! Card network classification from the leading digits of a card number.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card networks accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardNetwork {
    #[serde(rename = "American Express")]
    AmericanExpress,
    #[serde(rename = "Diners Club")]
    DinersClub,
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    MasterCard,
    RuPay,
    Visa,
    #[serde(other)]
    Unknown,
}

impl CardNetwork {
    /// Network name as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Discover => "Discover",
            CardNetwork::Jcb => "JCB",
            CardNetwork::MasterCard => "MasterCard",
            CardNetwork::RuPay => "RuPay",
            CardNetwork::Visa => "Visa",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a card number by its leading digits.
///
/// Only the prefix is inspected; length and checksum are not validated here
/// (see [`super::validate_checksum`]). Prefixes longer than the input never
/// match, so short or empty input classifies as [`CardNetwork::Unknown`].
pub fn classify_network(digits: &str) -> CardNetwork {
    let prefix = |len: usize| digits.get(..len);

    match prefix(1) {
        Some("4") => CardNetwork::Visa,
        Some("1" | "2") => match prefix(4) {
            Some("2131" | "1800") => CardNetwork::Jcb,
            _ => CardNetwork::Unknown,
        },
        Some("6") => match prefix(4) {
            Some("6011") => CardNetwork::Discover,
            _ => CardNetwork::Unknown,
        },
        Some("5") => match prefix(2) {
            Some("51" | "52" | "53" | "54" | "55") => CardNetwork::MasterCard,
            _ => CardNetwork::Unknown,
        },
        Some("3") => match prefix(2) {
            Some("34" | "37") => CardNetwork::AmericanExpress,
            Some("35") => CardNetwork::RuPay,
            Some("36") => CardNetwork::DinersClub,
            Some("30") => match prefix(3) {
                Some("300" | "301" | "302" | "303" | "304" | "305") => CardNetwork::DinersClub,
                _ => CardNetwork::Unknown,
            },
            Some(_) => CardNetwork::Jcb,
            None => CardNetwork::Unknown,
        },
        _ => CardNetwork::Unknown,
    }
}
