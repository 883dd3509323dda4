// ============================================================================
// Roman Numerals
// ============================================================================

use super::{ensure_finite, FormatError, FormatResult};

const OPERATION: &str = "roman numeral";

/// Value/symbol table, largest first
const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a positive integer to Roman numerals by greedy subtraction.
///
/// There is no upper bound below `u32::MAX`; thousands are written as
/// repeated `M`.
///
/// ```
/// use tiered_format::convert::to_roman;
///
/// assert_eq!(to_roman(1994.0).unwrap(), "MCMXCIV");
/// assert!(to_roman(0.0).is_err());
/// ```
pub fn to_roman(value: f64) -> FormatResult<String> {
    ensure_finite(OPERATION, value)?;

    if value < 1.0 {
        return Err(FormatError::invalid_input(
            OPERATION,
            format!("value must be at least 1, got {}", value),
        ));
    }
    if value.fract() != 0.0 {
        return Err(FormatError::invalid_input(
            OPERATION,
            format!("value must be an integer, got {}", value),
        ));
    }
    if value > u32::MAX as f64 {
        return Err(FormatError::invalid_input(
            OPERATION,
            format!("value must not exceed {}, got {}", u32::MAX, value),
        ));
    }

    Ok(encode(value as u32))
}

fn encode(mut remaining: u32) -> String {
    let mut numeral = String::new();
    for (amount, symbol) in ROMAN_NUMERALS {
        while remaining >= amount {
            numeral.push_str(symbol);
            remaining -= amount;
        }
    }
    numeral
}
