// ============================================================================
// Convert Module
// Stateless numeric-to-text conversions
// ============================================================================
//
// This module provides:
// - abbreviate: large-number tiers ("1.23K", "4.50M")
// - group_thousands: comma-grouped decimal text ("1,234.5")
// - abbreviate_bytes: binary byte-size tiers ("1.00KB")
// - to_roman: greedy Roman numerals ("MCMXCIV")
// - FormatError: Error taxonomy shared with the formatter
//
// Every function is pure; caching lives in the engine module.

mod abbreviation;
mod byte_size;
mod comma;
mod errors;
mod roman;

pub use abbreviation::abbreviate;
pub use byte_size::{abbreviate_bytes, ZERO_BYTES};
pub use comma::{group_digits, group_thousands};
pub use errors::{FormatError, FormatResult};
pub use roman::to_roman;

use crate::domain::TierOverflowPolicy;

fn ensure_finite(operation: &'static str, value: f64) -> FormatResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::invalid_input(
            operation,
            format!("{} is not a finite number", value),
        ))
    }
}

/// Bound `tier` by `max_tier`, clamping or failing per `policy`.
/// `available` is the suffix count reported back in the error.
fn resolve_tier(
    tier: usize,
    max_tier: usize,
    available: usize,
    policy: TierOverflowPolicy,
) -> FormatResult<usize> {
    if tier <= max_tier {
        return Ok(tier);
    }

    match policy {
        TierOverflowPolicy::Clamp => Ok(max_tier),
        TierOverflowPolicy::Reject => Err(FormatError::ConfigurationExhausted { tier, available }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("comma", 1.5).is_ok());
        assert!(ensure_finite("comma", f64::NAN).is_err());
        assert!(ensure_finite("comma", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_resolve_tier() {
        assert_eq!(resolve_tier(2, 13, 13, TierOverflowPolicy::Clamp), Ok(2));
        assert_eq!(resolve_tier(20, 13, 13, TierOverflowPolicy::Clamp), Ok(13));
        assert_eq!(
            resolve_tier(20, 13, 13, TierOverflowPolicy::Reject),
            Err(FormatError::ConfigurationExhausted {
                tier: 20,
                available: 13
            })
        );
    }
}
