// ============================================================================
// Large-Number Abbreviation
// 1234 -> "1.23K", 4_500_000 -> "4.50M"
// ============================================================================

use super::{ensure_finite, resolve_tier, FormatResult};
use crate::domain::TierOverflowPolicy;

const OPERATION: &str = "abbreviation";

/// Values below this magnitude are printed without a suffix
const THOUSAND: f64 = 1_000.0;

/// Integer digits per tier used by the tier estimate.
/// Tier boundaries fall at 4, 7, 10, 13, 17, ... digits.
const DIGITS_PER_TIER: f64 = 3.25;

/// Abbreviate `value` with the suffix of its magnitude tier.
///
/// Magnitudes below 1000 are rendered with `decimal_places` fractional
/// digits and no suffix. Otherwise the tier is `floor(digits / 3.25)` where
/// `digits` counts the integer digits of `|value|`; the value is divided by
/// `10^(3 * tier)` and suffixed with `suffixes[tier - 1]`.
///
/// # Example
/// ```
/// use tiered_format::convert::abbreviate;
/// use tiered_format::domain::{FormatterConfig, TierOverflowPolicy};
///
/// let suffixes = FormatterConfig::default().abbreviations;
/// assert_eq!(abbreviate(1234.0, &suffixes, 2, TierOverflowPolicy::Clamp).unwrap(), "1.23K");
/// assert_eq!(abbreviate(999.0, &suffixes, 2, TierOverflowPolicy::Clamp).unwrap(), "999.00");
/// ```
pub fn abbreviate(
    value: f64,
    suffixes: &[String],
    decimal_places: usize,
    policy: TierOverflowPolicy,
) -> FormatResult<String> {
    ensure_finite(OPERATION, value)?;

    if value.abs() < THOUSAND {
        return Ok(format!("{:.*}", decimal_places, value));
    }

    let digits = integer_digit_count(value);
    let estimate = (digits as f64 / DIGITS_PER_TIER).floor() as usize;
    let tier = resolve_tier(estimate, suffixes.len(), suffixes.len(), policy)?;

    let divisor = 10f64.powi((tier * 3) as i32);
    let suffix = tier
        .checked_sub(1)
        .and_then(|index| suffixes.get(index))
        .map_or("", String::as_str);

    Ok(format!("{:.*}{}", decimal_places, value / divisor, suffix))
}

/// Number of decimal digits in the integer part of `|value|`
fn integer_digit_count(value: f64) -> usize {
    format!("{:.0}", value.abs().trunc()).len()
}
