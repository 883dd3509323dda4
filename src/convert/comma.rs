// ============================================================================
// Thousands Grouping
// 1234567 -> "1,234,567", -1234.5 -> "-1,234.5"
// ============================================================================

use super::{ensure_finite, FormatResult};

const OPERATION: &str = "comma";

/// Insert `,` between every three integer digits of `value`'s textual form.
///
/// The fractional part is passed through exactly as `value` renders it;
/// no rounding is applied.
pub fn group_thousands(value: f64) -> FormatResult<String> {
    ensure_finite(OPERATION, value)?;
    Ok(group_digits(&value.to_string()))
}

/// Group the leading integer digit run of an already rendered number.
///
/// The text is split into an optional sign, the integer digits, and
/// whatever follows them; only the digit run is touched.
///
/// ```
/// use tiered_format::convert::group_digits;
///
/// assert_eq!(group_digits("+1234567.891"), "+1,234,567.891");
/// assert_eq!(group_digits("12"), "12");
/// ```
pub fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => text.split_at(1),
        _ => ("", text),
    };

    let split = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (digits, remainder) = unsigned.split_at(split);

    let mut result = String::with_capacity(text.len() + digits.len() / 3);
    result.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.push_str(remainder);
    result
}
