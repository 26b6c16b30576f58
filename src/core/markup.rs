use thiserror::Error;

/// Problems with the page markup the behaviors are attached to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType {
        selector: &'static str,
        expected: &'static str,
    },
    #[error("counter target `{value}` is not an integer")]
    BadCounterTarget { value: String },
}

/// Parse a `data-target` attribute the way `parseInt` would accept a
/// well-formed value: surrounding whitespace is ignored, a leading sign is
/// allowed, trailing non-digits are dropped. Digit runs beyond the `i64`
/// range saturate.
pub fn parse_counter_target(raw: &str) -> Result<i64, MarkupError> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let bad = || MarkupError::BadCounterTarget {
        value: raw.to_string(),
    };
    if end == 0 {
        return Err(bad());
    }
    let sign_len = trimmed.len() - digits.len();
    Ok(trimmed[..sign_len + end]
        .parse::<i64>()
        .unwrap_or(if sign < 0 { i64::MIN } else { i64::MAX }))
}
