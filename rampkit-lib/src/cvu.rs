//! Mercado Pago CVU validation.
//!
//! A CVU (Clave Virtual Uniforme) is a 22-digit Argentine virtual account
//! identifier. Mercado Pago CVUs start with the entity prefix `00000031`.
//! Digits 8..21 form the account block, digit 21 is its check digit,
//! computed as a weighted modulo-10 sum.
//!
//! Only the account block is verified here. The entity block carries its own
//! check digit which this validator does not inspect.

use crate::{RampkitError, Result};

/// Entity prefix shared by every Mercado Pago CVU.
pub const MERCADO_PAGO_CVU_PREFIX: &str = "00000031";

/// Number of digits in a CVU.
pub const CVU_LENGTH: usize = 22;

/// Weights applied to the 13-digit account block.
const ACCOUNT_BLOCK_WEIGHTS: [u32; 13] = [3, 9, 7, 1, 3, 9, 7, 1, 3, 9, 7, 1, 3];

const ACCOUNT_BLOCK_START: usize = 8;
const CHECK_DIGIT_INDEX: usize = 21;

/// Validates a Mercado Pago CVU and returns it unchanged as the canonical
/// payee identifier.
///
/// # Errors
///
/// - [`RampkitError::InvalidCvuFormat`] unless the input is exactly 22 ASCII digits
/// - [`RampkitError::InvalidCvuPrefix`] unless it starts with `00000031`
/// - [`RampkitError::CvuChecksumMismatch`] if the account block check digit is wrong
///
/// # Example
///
/// ```
/// use rampkit_lib::cvu::validate_cvu;
///
/// assert_eq!(validate_cvu("0000003100000000000000").unwrap(), "0000003100000000000000");
/// assert!(validate_cvu("0000003100000000000005").is_err());
/// ```
pub fn validate_cvu(cvu: &str) -> Result<String> {
    let digits = cvu.as_bytes();
    if digits.len() != CVU_LENGTH || !digits.iter().all(u8::is_ascii_digit) {
        return Err(RampkitError::InvalidCvuFormat);
    }

    if !cvu.starts_with(MERCADO_PAGO_CVU_PREFIX) {
        return Err(RampkitError::InvalidCvuPrefix {
            expected: MERCADO_PAGO_CVU_PREFIX,
        });
    }

    let expected = account_block_check_digit(&digits[ACCOUNT_BLOCK_START..CHECK_DIGIT_INDEX])
        .ok_or(RampkitError::InvalidCvuFormat)?;
    let found = digits[CHECK_DIGIT_INDEX] - b'0';
    if expected != found {
        return Err(RampkitError::CvuChecksumMismatch { expected, found });
    }

    Ok(cvu.to_string())
}

/// Computes `(10 - (Σ digit·weight mod 10)) mod 10` over a block of ASCII digits.
///
/// Returns `None` if the block holds anything other than ASCII digits. Digits
/// beyond the 13-entry weight table are ignored.
pub fn account_block_check_digit(block: &[u8]) -> Option<u8> {
    if !block.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let weighted_sum: u32 = block
        .iter()
        .zip(ACCOUNT_BLOCK_WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    Some(((10 - weighted_sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_block_is_valid() {
        let cvu = "0000003100000000000000";
        assert_eq!(validate_cvu(cvu).unwrap(), cvu);
    }

    #[test]
    fn test_wrong_check_digit() {
        match validate_cvu("0000003100000000000005") {
            Err(RampkitError::CvuChecksumMismatch { expected, found }) => {
                assert_eq!(expected, 0);
                assert_eq!(found, 5);
            }
            other => panic!("Expected CvuChecksumMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_weighted_block() {
        // block 0000000000001: 1*3 = 3 -> (10 - 3) % 10 = 7
        assert_eq!(account_block_check_digit(b"0000000000001"), Some(7));
        assert!(validate_cvu("0000003100000000000017").is_ok());

        // block 1000000000000: 1*3 = 3 -> 7
        assert!(validate_cvu("0000003110000000000007").is_ok());

        // block 0100000000000: 1*9 = 9 -> 1
        assert!(validate_cvu("0000003101000000000001").is_ok());

        // block 1111111111111: 3+9+7+1+3+9+7+1+3+9+7+1+3 = 63 -> 7
        assert!(validate_cvu("0000003111111111111117").is_ok());
    }

    #[test]
    fn test_check_digit_rejects_non_digits() {
        assert_eq!(account_block_check_digit(b" "), None);
        assert_eq!(account_block_check_digit(b"000000000000/"), None);
        assert_eq!(account_block_check_digit(b"00000a0000000"), None);
        assert_eq!(account_block_check_digit(b""), Some(0));
    }

    #[test]
    fn test_format_errors() {
        for input in [
            "",
            "000000310000000000000",
            "00000031000000000000000",
            "00000031000000000000a0",
            " 000000310000000000000",
            "0000003100000000000000\n",
            "٠٠٠٠٠٠٣١٠٠٠٠٠٠٠٠٠٠٠٠",
        ] {
            assert!(
                matches!(validate_cvu(input), Err(RampkitError::InvalidCvuFormat)),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_prefix_error() {
        assert!(matches!(
            validate_cvu("2850590940090418135201"),
            Err(RampkitError::InvalidCvuPrefix { expected: "00000031" })
        ));
    }
}
