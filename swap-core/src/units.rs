//! Decimal-string to base-unit conversion
//!
//! The swap form never validates what the user types; conversion is the
//! single gate between free-form input and the integer value a transaction
//! carries. Anything that is not a plain non-negative decimal number fails
//! the submission cleanly rather than being coerced to zero.

use crate::error::AppError;

/// Convert a human decimal amount (e.g. `"1.5"`) into its base-unit
/// integer representation at the given number of decimals.
///
/// Accepts plain decimal strings, including `".5"` and `"1."` forms.
/// Rejects empty input, signs, exponents, multiple dots, more fractional
/// digits than `decimals`, and values that overflow `u128`.
///
/// # Examples
///
/// ```rust
/// use swap_core::units::parse_units;
///
/// assert_eq!(parse_units("1.5", 18).unwrap(), 1_500_000_000_000_000_000);
/// assert_eq!(parse_units("300", 18).unwrap(), 300_000_000_000_000_000_000);
/// assert!(parse_units("abc", 18).is_err());
/// ```
pub fn parse_units(amount: &str, decimals: u32) -> Result<u128, AppError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AppError::InvalidAmount("amount is empty".to_string()));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    // A lone "." has neither part; "-1", "1e3" and "1.2.3" all fail the
    // digit check ("1.2.3" leaves a dot inside the fractional part).
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AppError::InvalidAmount(not_a_number(amount)));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AppError::InvalidAmount(not_a_number(amount)));
    }
    if frac_part.len() > decimals as usize {
        return Err(AppError::InvalidAmount(format!(
            "'{}' has more than {} decimal places",
            amount, decimals
        )));
    }

    let scale = 10u128
        .checked_pow(decimals)
        .ok_or_else(|| AppError::InvalidAmount(format!("unsupported decimals: {}", decimals)))?;

    let int_value = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse::<u128>()
            .map_err(|_| AppError::InvalidAmount(too_large(amount)))?
    };

    let frac_value = if frac_part.is_empty() {
        0
    } else {
        let digits = frac_part
            .parse::<u128>()
            .map_err(|_| AppError::InvalidAmount(too_large(amount)))?;
        digits * 10u128.pow(decimals - frac_part.len() as u32)
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| AppError::InvalidAmount(too_large(amount)))
}

fn not_a_number(amount: &str) -> String {
    format!("'{}' is not a valid decimal number", amount)
}

fn too_large(amount: &str) -> String {
    format!("'{}' is too large", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(parse_units("0", 18).unwrap(), 0);
        assert_eq!(parse_units("1", 18).unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_units("300", 18).unwrap(), 300_000_000_000_000_000_000);
        assert_eq!(parse_units("42", 0).unwrap(), 42);
    }

    #[test]
    fn test_fractional_numbers() {
        assert_eq!(parse_units("1.5", 18).unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(parse_units("0.5", 18).unwrap(), 500_000_000_000_000_000);
        assert_eq!(parse_units(".5", 18).unwrap(), 500_000_000_000_000_000);
        assert_eq!(parse_units("2.", 18).unwrap(), 2_000_000_000_000_000_000);
        assert_eq!(parse_units("0.000000000000000001", 18).unwrap(), 1);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_units(" 1.5 ", 18).unwrap(), 1_500_000_000_000_000_000);
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "   ", ".", "abc", "1.2.3", "-1", "+1", "1e3", "1,5", "0x10"] {
            assert!(
                matches!(parse_units(bad, 18), Err(AppError::InvalidAmount(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_excess_precision() {
        assert!(parse_units("0.0000000000000000001", 18).is_err());
        assert!(parse_units("1.23", 1).is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        // u128::MAX has 39 digits; this integer part alone overflows at 18 decimals.
        let huge = "9".repeat(40);
        assert!(parse_units(&huge, 18).is_err());
    }
}
