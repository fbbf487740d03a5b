//! Lenient integer parsing for spreadsheet cells.

/// Parse the leading integer of a cell the way spreadsheet exports are read:
/// surrounding whitespace is ignored, an optional sign is accepted, and
/// trailing non-digits are dropped (`"2 options"` → `2`). Out-of-range digit
/// runs saturate at `i64::MIN`/`i64::MAX`. Returns `None` when no digits lead
/// the cell.
pub fn leading_int(cell: &str) -> Option<i64> {
    let trimmed = cell.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Accumulate toward the sign so i64::MIN stays representable.
    let value = rest.bytes().take(digits).fold(0_i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}
