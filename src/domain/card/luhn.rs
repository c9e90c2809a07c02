//! Luhn (mod 10) checksum validation.
//!
//! See <https://en.wikipedia.org/wiki/Luhn_algorithm>.

use thiserror::Error;

/// A card number that is not a plain string of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardNumberError {
    #[error("invalid character '{character}' at position {position} in card number")]
    InvalidDigit { position: usize, character: char },
}

/// Validate the Luhn checksum of a card number.
///
/// Digits are scanned right to left; every second digit starting from the
/// second-to-last is doubled, with 9 subtracted from doubled values above 9.
/// The number is valid when the sum is a multiple of 10.
///
/// Returns `Ok(false)` for a well-formed number that fails the check and an
/// error for any non-digit character. No separators are accepted.
pub fn validate_checksum(digits: &str) -> Result<bool, CardNumberError> {
    Ok(weighted_sum(digits, 1)? % 10 == 0)
}

/// Compute the digit that makes `partial` pass [`validate_checksum`] when
/// appended.
pub fn check_digit(partial: &str) -> Result<u32, CardNumberError> {
    // Appending a digit shifts every position by one, so doubling starts on
    // the current last digit.
    let sum = weighted_sum(partial, 0)?;
    Ok((10 - sum % 10) % 10)
}

/// Sum the digits right to left, doubling those whose distance from the end
/// has the given parity.
fn weighted_sum(digits: &str, doubled_parity: usize) -> Result<u32, CardNumberError> {
    let mut sum = 0;

    for (distance, (position, character)) in digits.char_indices().rev().enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(CardNumberError::InvalidDigit {
                position,
                character,
            })?;

        sum += if distance % 2 == doubled_parity {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_valid_numbers() {
        assert_eq!(validate_checksum("4242424242424242"), Ok(true));
        assert_eq!(validate_checksum("79927398713"), Ok(true));
        assert_eq!(validate_checksum("378282246310005"), Ok(true));
        assert_eq!(validate_checksum("6011000990139424"), Ok(true));
        assert_eq!(validate_checksum("5555555555554444"), Ok(true));
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert_eq!(validate_checksum("4213729238347292"), Ok(false));
        assert_eq!(validate_checksum("79927398710"), Ok(false));
        assert_eq!(validate_checksum("601134239348202"), Ok(false));
        assert_eq!(validate_checksum("300134239348202"), Ok(false));
    }

    #[test]
    fn test_cards_from_the_sandbox_pass() {
        let good_cards = [
            "4012888888881881",
            "5105105105105100",
            "371449635398431",
            "6011111111111117",
            "30569309025904",
            "38520000023237",
            "3530111333300000",
            "3566002020360505",
            "4000000000000002",
            "4000000000000127",
        ];
        for card in good_cards {
            assert_eq!(validate_checksum(card), Ok(true), "{card}");
        }
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(validate_checksum(""), Ok(true));
    }

    #[test]
    fn non_digits_are_errors() {
        assert_eq!(
            validate_checksum("4242-4242"),
            Err(CardNumberError::InvalidDigit {
                position: 4,
                character: '-'
            })
        );
        assert!(validate_checksum("4242 4242 4242 4242").is_err());
        assert!(validate_checksum("42a2").is_err());
    }

    #[test]
    fn unicode_digits_are_errors() {
        // Arabic-Indic digit four
        assert!(validate_checksum("\u{0664}242").is_err());
    }

    #[test]
    fn check_digit_completes_known_numbers() {
        assert_eq!(check_digit("7992739871"), Ok(3));
        assert_eq!(check_digit("424242424242424"), Ok(2));
    }

    proptest! {
        #[test]
        fn checksum_is_deterministic(digits in "[0-9]{0,24}") {
            prop_assert_eq!(validate_checksum(&digits), validate_checksum(&digits));
        }

        #[test]
        fn appending_check_digit_validates(partial in "[0-9]{1,24}") {
            let digit = check_digit(&partial).unwrap();
            let full = format!("{partial}{digit}");
            prop_assert_eq!(validate_checksum(&full), Ok(true));
        }

        #[test]
        fn single_digit_change_is_detected(partial in "[0-9]{1,18}", bump in 1u32..10) {
            let digit = check_digit(&partial).unwrap();
            let wrong = (digit + bump) % 10;
            let full = format!("{partial}{wrong}");
            prop_assert_eq!(validate_checksum(&full), Ok(false));
        }
    }
}
