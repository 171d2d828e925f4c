//! Contact detail checks: e-mail addresses and Turkish phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

// Optional +90 or 0 trunk prefix, then ten digits not starting with 0.
static PHONE_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^(\+90|0)?[1-9][0-9]{9}$"));

fn matches(pattern: &Lazy<Result<Regex, regex::Error>>, value: &str) -> bool {
    match pattern.as_ref() {
        Ok(re) => re.is_match(value),
        Err(e) => {
            tracing::error!(error = %e, "contact pattern failed to compile");
            false
        }
    }
}

/// Loose shape check: something, `@`, something, `.`, something, with no
/// whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    matches(&EMAIL_REGEX, email)
}

/// Turkish phone number, whitespace ignored: `5321234567`, `05321234567`
/// or `+905321234567`.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    matches(&PHONE_REGEX, &compact)
}

/// Render a ten-digit number as `(532) 123 45 67`.
///
/// Non-digits are dropped before counting. Anything that does not reduce to
/// exactly ten digits is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return phone.to_string();
    }
    format!(
        "({}) {} {} {}",
        &digits[..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_shapes() {
        assert!(is_valid_email("hasta@example.com"));
        assert!(is_valid_email("eczane.admin@mail.example.com.tr"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn email_rejects_bad_shapes() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("missing-dot@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("with space@example.com"));
        assert!(!is_valid_email("trailing-dot@example."));
    }

    #[test]
    fn phone_accepts_prefixes_and_spaces() {
        assert!(is_valid_phone("5321234567"));
        assert!(is_valid_phone("05321234567"));
        assert!(is_valid_phone("+905321234567"));
        assert!(is_valid_phone("0532 123 45 67"));
        assert!(is_valid_phone("+90 532 123 45 67"));
    }

    #[test]
    fn phone_rejects_bad_numbers() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("0032123456")); // subscriber part starts with 0
        assert!(!is_valid_phone("532123456")); // nine digits
        assert!(!is_valid_phone("553212345678")); // twelve digits
        assert!(!is_valid_phone("+15321234567")); // foreign country code
        assert!(!is_valid_phone("0532-123-4567")); // dashes are not stripped
    }

    #[test]
    fn format_ten_digits() {
        assert_eq!(format_phone_number("5321234567"), "(532) 123 45 67");
        assert_eq!(format_phone_number("532-123-45-67"), "(532) 123 45 67");
    }

    #[test]
    fn format_leaves_other_lengths_alone() {
        assert_eq!(format_phone_number("05321234567"), "05321234567");
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number(""), "");
    }
}
