// ============================================================================
// Byte-Size Abbreviation
// 1024 -> "1.00KB", 1536 -> "1.50KB"
// ============================================================================

use super::{ensure_finite, resolve_tier, FormatError, FormatResult};
use crate::domain::TierOverflowPolicy;

const OPERATION: &str = "byte size";

/// Rendering of a zero byte count, independent of configuration
pub const ZERO_BYTES: &str = "0 Bytes";

const BYTES_PER_TIER: f64 = 1024.0;

/// Abbreviate a byte count using binary (1024-based) tiers.
///
/// The tier is `floor(log2(value) / 10)`, bounded below by 0 for fractional
/// counts. The suffix is appended without a separating space.
pub fn abbreviate_bytes(
    value: f64,
    suffixes: &[String],
    decimal_places: usize,
    policy: TierOverflowPolicy,
) -> FormatResult<String> {
    ensure_finite(OPERATION, value)?;

    if value < 0.0 {
        return Err(FormatError::invalid_input(
            OPERATION,
            format!("byte count cannot be negative, got {}", value),
        ));
    }

    if value == 0.0 {
        return Ok(ZERO_BYTES.to_string());
    }

    let estimate = (value.log2() / 10.0).floor().max(0.0) as usize;
    let last = suffixes.len().saturating_sub(1);
    let tier = resolve_tier(estimate, last, suffixes.len(), policy)?;

    let divisor = BYTES_PER_TIER.powi(tier as i32);
    let suffix = suffixes.get(tier).map_or("", String::as_str);

    Ok(format!("{:.*}{}", decimal_places, value / divisor, suffix))
}
