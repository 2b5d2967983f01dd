use once_cell::sync::Lazy;
use regex::Regex;

// Currency tokens in these documents come as "Rs. 12,34,500", "Rs 4500",
// bare grouped digits, with Indian or western grouping.
pub(crate) static RUPEE_AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Rs\.?\s*([0-9,]+)").expect("valid amount pattern"));

/// Shared normalization rule for every extractor: strip each non-digit
/// character, then parse base 10. An empty digit string is "no value",
/// never zero.
pub(crate) fn parse_amount(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// First rupee-prefixed amount in `text`, if any.
pub(crate) fn first_rupee_amount(text: &str) -> Option<u64> {
    RUPEE_AMOUNT_RE
        .captures(text)
        .and_then(|captures| parse_amount(&captures[1]))
}
