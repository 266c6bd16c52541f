/// Strips everything but ascii digits - the stored representation.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a digits-only phone number for display. 10-digit numbers get
/// the usual (XXX) XXX-XXXX shape, 11-digit numbers with a leading 1 the
/// same with a +1 prefix, everything else is returned as-is.
pub fn format_display(digits: &str) -> String {
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ),
        _ => digits.to_string(),
    }
}
