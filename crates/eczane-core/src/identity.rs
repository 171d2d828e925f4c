//! # Identity Numbers
//!
//! Turkish national identity number (T.C. Kimlik No, "TCKN") validation.
//!
//! ## Format
//!
//! Eleven ASCII digits, the first of which is non-zero. The last two digits
//! are check digits derived from the first nine:
//!
//! - `d9  = (7 * (d0 + d2 + d4 + d6 + d8) - (d1 + d3 + d5 + d7)) mod 10`
//! - `d10 = (d0 + d1 + ... + d9) mod 10`
//!
//! `mod` is Euclidean: the first expression goes negative for inputs such as
//! `1909090901x` and must still land in `0..=9`.
//!
//! ## Privacy
//!
//! A [`Tckn`] is personal data. `Display` and `Debug` both print the masked
//! form (`123***901`); the raw digits are only reachable through
//! [`Tckn::as_str`] and serialization.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of digits in a TCKN.
pub const TCKN_LENGTH: usize = 11;

/// Routes `Deserialize` through the type's `new()` constructor so that
/// invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Check an identity number against the format and both checksum digits.
///
/// Never fails: malformed input (wrong length, non-digits, leading zero,
/// empty string) is simply `false`.
pub fn is_valid_tckn(input: &str) -> bool {
    match parse_digits(input) {
        Some(digits) => checksum_holds(&digits),
        None => false,
    }
}

/// Decompose `^[1-9][0-9]{10}$` into digit values.
fn parse_digits(input: &str) -> Option<[u8; TCKN_LENGTH]> {
    let bytes = input.as_bytes();
    if bytes.len() != TCKN_LENGTH || bytes[0] == b'0' {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut digits = [0u8; TCKN_LENGTH];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        *slot = byte - b'0';
    }
    Some(digits)
}

/// Compute `(d9, d10)` for the first nine digits.
fn check_digits(prefix: &[u8]) -> (u8, u8) {
    let odd_sum: i32 = prefix.iter().step_by(2).map(|&d| i32::from(d)).sum();
    let even_sum: i32 = prefix.iter().skip(1).step_by(2).map(|&d| i32::from(d)).sum();

    let tenth = (odd_sum * 7 - even_sum).rem_euclid(10);
    let eleventh = (odd_sum + even_sum + tenth).rem_euclid(10);

    // Both values are in 0..=9.
    (tenth as u8, eleventh as u8)
}

fn checksum_holds(digits: &[u8; TCKN_LENGTH]) -> bool {
    let (tenth, eleventh) = check_digits(&digits[..9]);
    digits[9] == tenth && digits[10] == eleventh
}

/// A Turkish national identity number that passed [`is_valid_tckn`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tckn(String);

impl_validating_deserialize!(Tckn);

impl Tckn {
    /// Create a TCKN, validating format and checksum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTckn`] if [`is_valid_tckn`] rejects
    /// the value.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_valid_tckn(&s) {
            tracing::debug!(length = s.chars().count(), "rejected TCKN");
            return Err(ValidationError::InvalidTckn {
                length: s.chars().count(),
            });
        }
        Ok(Self(s))
    }

    /// Build a valid TCKN from its first nine digits by appending both
    /// check digits. Useful for producing synthetic numbers in fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTckn`] unless `prefix` is nine ASCII
    /// digits with a non-zero first digit.
    pub fn from_prefix(prefix: &str) -> Result<Self, ValidationError> {
        let bytes = prefix.as_bytes();
        let well_formed =
            bytes.len() == 9 && bytes[0] != b'0' && bytes.iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(ValidationError::InvalidTckn {
                length: prefix.chars().count(),
            });
        }

        let digits: Vec<u8> = bytes.iter().map(|b| b - b'0').collect();
        let (tenth, eleventh) = check_digits(&digits);
        Self::new(format!("{prefix}{tenth}{eleventh}"))
    }

    /// The raw eleven-digit value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> [u8; TCKN_LENGTH] {
        let mut digits = [0u8; TCKN_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(self.0.as_bytes()) {
            *slot = byte - b'0';
        }
        digits
    }

    /// First three and last three digits with the middle hidden: `123***901`.
    pub fn masked(&self) -> String {
        format!("{}***{}", &self.0[..3], &self.0[TCKN_LENGTH - 3..])
    }
}

impl std::fmt::Display for Tckn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

impl std::fmt::Debug for Tckn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tckn({})", self.masked())
    }
}

impl std::str::FromStr for Tckn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Tckn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
