// ui/src/format.rs

/// Formats an integer with a `,` between every group of three digits,
/// counting from the right. The sign is kept and only the magnitude is
/// grouped, so `-1234567` becomes `"-1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    // unsigned_abs keeps i64::MIN from overflowing.
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Rounds to the nearest whole number, half away from zero.
/// NaN becomes 0 and out-of-range values saturate at the `i64` bounds.
pub fn round_to_i64(value: f64) -> i64 {
    // `as` already saturates and maps NaN to 0.
    value.round() as i64
}
