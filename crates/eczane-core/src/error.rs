//! # Error Types
//!
//! Errors raised while constructing typed values. Rejecting user input is
//! not an error in this crate: the `is_valid_*` helpers return `bool` and
//! [`validate_credential`](crate::credential::validate_credential) returns a
//! [`ValidationResult`](crate::credential::ValidationResult). `Result` is
//! reserved for building [`Tckn`](crate::identity::Tckn) and
//! [`PasswordPolicy`](crate::credential::PasswordPolicy) values, where the
//! caller asked for a guaranteed-valid instance.

use thiserror::Error;

/// Construction-time rejection of a domain value.
///
/// Raw identity numbers are never carried in the error; only their length,
/// so that errors can be logged without leaking personal data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identity number failed the format or checksum test.
    #[error("invalid TCKN ({length} characters): expected 11 digits, no leading zero, valid checksum")]
    InvalidTckn {
        /// Character count of the rejected input.
        length: usize,
    },

    /// Password policy is not satisfiable as configured.
    #[error("invalid password policy: {0}")]
    InvalidPasswordPolicy(String),
}
