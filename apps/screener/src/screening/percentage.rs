use std::sync::OnceLock;

use regex::Regex;

fn percentage_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)%").expect("percentage pattern is valid"))
}

fn decimal_digit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\A\p{Nd}\z").expect("digit pattern is valid"))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    decimal_digit_pattern().is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (general category Nd).
///
/// Nd characters come in contiguous runs of whole 0..9 blocks, so the value
/// is the distance from the start of the run, modulo 10.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    (c as u32 - start) % 10
}

/// Returns the first run of decimal digits (any script) immediately followed
/// by `%`, as a float. Text without such a run scores 0.0.
pub fn extract_percentage(reply: &str) -> f64 {
    percentage_pattern()
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| {
            let ascii: String = digits
                .as_str()
                .chars()
                .filter_map(|c| char::from_digit(digit_value(c), 10))
                .collect();
            ascii.parse::<f64>().ok()
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pattern_is_zero() {
        assert_eq!(extract_percentage(""), 0.0);
        assert_eq!(extract_percentage("Strong candidate, no score given."), 0.0);
        assert_eq!(extract_percentage("50 % with a space does not count"), 0.0);
        assert_eq!(extract_percentage("percent sign alone: %"), 0.0);
    }

    #[test]
    fn test_single_match() {
        assert_eq!(extract_percentage("Match: 37% overall"), 37.0);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_percentage("20% now, maybe 80% later"), 20.0);
    }

    #[test]
    fn test_decimal_takes_fraction_digits() {
        // Only the digit run touching `%` is captured.
        assert_eq!(extract_percentage("Score: 72.5%"), 5.0);
    }

    #[test]
    fn test_non_ascii_digit_run_is_parsed() {
        // Arabic-Indic eight and five
        assert_eq!(extract_percentage("Match ٨٥%, adjusted 40%"), 85.0);
        // Devanagari seven and zero
        assert_eq!(extract_percentage("स्कोर ७०%"), 70.0);
        // Mathematical bold digits sit in back-to-back blocks
        assert_eq!(extract_percentage("\u{1D7D7}\u{1D7D0}%"), 92.0);
    }

    #[test]
    fn test_digit_value_across_scripts() {
        assert_eq!(digit_value('7'), 7);
        assert_eq!(digit_value('\u{0660}'), 0);
        assert_eq!(digit_value('\u{0669}'), 9);
        assert_eq!(digit_value('\u{FF13}'), 3);
    }

    #[test]
    fn test_large_values_are_not_clamped() {
        assert_eq!(extract_percentage("Overachiever at 150%"), 150.0);
    }
}
