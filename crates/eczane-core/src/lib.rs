//! # eczane-core — Validation Primitives for e-Eczane
//!
//! Pure, side-effect-free checks that the registration, login and
//! password-reset forms run before anything is sent to the API.
//!
//! ## Components
//!
//! 1. **Identity numbers** ([`identity`]). [`is_valid_tckn`] applies the
//!    format rule and both check digits of the Turkish national identity
//!    number. [`Tckn`] is the validated newtype; it masks itself in
//!    `Display`/`Debug`.
//!
//! 2. **Credential policy** ([`credential`]). [`validate_credential`] checks
//!    a password and its confirmation against a [`PasswordPolicy`] and
//!    reports the first failing rule as a locale-independent
//!    [`CredentialReason`].
//!
//! 3. **Contact details and formatting** ([`contact`], [`format`]).
//!    E-mail and phone checks plus Turkish display helpers.
//!
//! ## Crate Policy
//!
//! - No I/O, no global mutable state. Every function may be called from
//!   any thread without coordination.
//! - Rejected input is a value, not an error: `bool` or
//!   [`ValidationResult`]. [`ValidationError`] is only returned when a
//!   caller asks for a guaranteed-valid typed value.
//! - No `.unwrap()` outside tests.
//! - Passwords and raw identity numbers are never logged.

pub mod contact;
pub mod credential;
pub mod error;
pub mod format;
pub mod identity;

// Re-export primary types at crate root for ergonomic imports.
pub use contact::{format_phone_number, is_valid_email, is_valid_phone};
pub use credential::{
    validate_credential, CredentialReason, PasswordPolicy, Requirement, ValidationResult,
};
pub use error::ValidationError;
pub use identity::{is_valid_tckn, Tckn, TCKN_LENGTH};
