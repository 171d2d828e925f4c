//! # Credential Policy
//!
//! Password composition checks used by the registration, change-password
//! and reset-password flows.
//!
//! ## Rule Order
//!
//! Rules are evaluated in a fixed order and the first failure wins:
//!
//! 1. length (`min_length`, counted in Unicode scalar values)
//! 2. uppercase `A-Z` (if required)
//! 3. lowercase `a-z` (if required)
//! 4. digit `0-9` (if required)
//! 5. candidate equals confirmation
//!
//! The order decides which single message the user sees, so it lives in one
//! table ([`RULES`]) rather than in nested conditionals.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Password composition policy.
///
/// Construct with [`PasswordPolicy::new`] or a preset. Deserialization goes
/// through the same check, so a policy with `min_length: 0` cannot be
/// loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPasswordPolicy")]
pub struct PasswordPolicy {
    min_length: usize,
    require_upper: bool,
    require_lower: bool,
    require_digit: bool,
}

/// Unchecked wire form of [`PasswordPolicy`]. Missing fields take the
/// strict defaults.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPasswordPolicy {
    min_length: usize,
    require_upper: bool,
    require_lower: bool,
    require_digit: bool,
}

impl Default for RawPasswordPolicy {
    fn default() -> Self {
        let strict = PasswordPolicy::strict();
        Self {
            min_length: strict.min_length,
            require_upper: strict.require_upper,
            require_lower: strict.require_lower,
            require_digit: strict.require_digit,
        }
    }
}

impl TryFrom<RawPasswordPolicy> for PasswordPolicy {
    type Error = ValidationError;

    fn try_from(raw: RawPasswordPolicy) -> Result<Self, Self::Error> {
        Self::new(
            raw.min_length,
            raw.require_upper,
            raw.require_lower,
            raw.require_digit,
        )
    }
}

impl PasswordPolicy {
    /// Minimum length of the strict policy.
    pub const STRICT_MIN_LENGTH: usize = 8;

    /// Minimum length accepted at sign-up.
    pub const REGISTRATION_MIN_LENGTH: usize = 6;

    /// Create a policy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPasswordPolicy`] if `min_length` is 0.
    pub fn new(
        min_length: usize,
        require_upper: bool,
        require_lower: bool,
        require_digit: bool,
    ) -> Result<Self, ValidationError> {
        if min_length == 0 {
            return Err(ValidationError::InvalidPasswordPolicy(
                "min_length must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            min_length,
            require_upper,
            require_lower,
            require_digit,
        })
    }

    /// Eight characters with upper, lower and digit. Applied when a
    /// password is changed or reset.
    pub const fn strict() -> Self {
        Self {
            min_length: Self::STRICT_MIN_LENGTH,
            require_upper: true,
            require_lower: true,
            require_digit: true,
        }
    }

    /// Six characters, no character classes. Applied at sign-up.
    pub const fn registration() -> Self {
        Self {
            min_length: Self::REGISTRATION_MIN_LENGTH,
            require_upper: false,
            require_lower: false,
            require_digit: false,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn require_upper(&self) -> bool {
        self.require_upper
    }

    pub fn require_lower(&self) -> bool {
        self.require_lower
    }

    pub fn require_digit(&self) -> bool {
        self.require_digit
    }

    /// Evaluate every enabled composition rule without short-circuiting.
    ///
    /// Drives "requirements met" feedback while the user is still typing.
    /// The confirmation rule is not part of the checklist.
    pub fn checklist(&self, candidate: &str) -> Vec<Requirement> {
        let input = RuleInput {
            candidate,
            confirmation: candidate,
            policy: self,
        };
        RULES
            .iter()
            .filter(|(reason, _)| self.lists(*reason))
            .map(|(reason, check)| Requirement {
                reason: *reason,
                satisfied: check(&input),
            })
            .collect()
    }

    /// Whether `reason` belongs on the checklist: the length rule plus every
    /// enabled character class. The confirmation rule never does.
    fn lists(&self, reason: CredentialReason) -> bool {
        match reason {
            CredentialReason::TooShort => true,
            CredentialReason::Mismatch => false,
            CredentialReason::MissingUppercase => self.require_upper,
            CredentialReason::MissingLowercase => self.require_lower,
            CredentialReason::MissingDigit => self.require_digit,
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Why a candidate password was rejected.
///
/// Codes are locale-independent; [`CredentialReason::message_tr`] gives the
/// Turkish text shown by the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialReason {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    Mismatch,
}

impl CredentialReason {
    /// Stable machine-readable code, e.g. `TOO_SHORT`.
    pub fn code(self) -> &'static str {
        match self {
            Self::TooShort => "TOO_SHORT",
            Self::MissingUppercase => "MISSING_UPPERCASE",
            Self::MissingLowercase => "MISSING_LOWERCASE",
            Self::MissingDigit => "MISSING_DIGIT",
            Self::Mismatch => "MISMATCH",
        }
    }

    /// Turkish user-facing message. The length message quotes the policy's
    /// minimum.
    pub fn message_tr(self, policy: &PasswordPolicy) -> String {
        match self {
            Self::TooShort => format!("Şifre en az {} karakter olmalıdır", policy.min_length),
            Self::MissingUppercase => "Şifre en az bir büyük harf içermelidir".to_string(),
            Self::MissingLowercase => "Şifre en az bir küçük harf içermelidir".to_string(),
            Self::MissingDigit => "Şifre en az bir rakam içermelidir".to_string(),
            Self::Mismatch => "Şifreler eşleşmiyor".to_string(),
        }
    }
}

impl std::fmt::Display for CredentialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of [`validate_credential`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationResult {
    Valid,
    Invalid(CredentialReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The first failing rule, if any.
    pub fn reason(&self) -> Option<CredentialReason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }
}

/// One line of a [`PasswordPolicy::checklist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// The rule, named by the reason it would fail with.
    pub reason: CredentialReason,
    pub satisfied: bool,
}

struct RuleInput<'a> {
    candidate: &'a str,
    confirmation: &'a str,
    policy: &'a PasswordPolicy,
}

type Rule = (CredentialReason, fn(&RuleInput<'_>) -> bool);

/// Evaluation order. Each predicate returns `true` when the rule passes.
const RULES: [Rule; 5] = [
    (CredentialReason::TooShort, meets_min_length),
    (CredentialReason::MissingUppercase, has_required_upper),
    (CredentialReason::MissingLowercase, has_required_lower),
    (CredentialReason::MissingDigit, has_required_digit),
    (CredentialReason::Mismatch, matches_confirmation),
];

fn meets_min_length(input: &RuleInput<'_>) -> bool {
    input.candidate.chars().count() >= input.policy.min_length
}

fn has_required_upper(input: &RuleInput<'_>) -> bool {
    !input.policy.require_upper || input.candidate.chars().any(|c| c.is_ascii_uppercase())
}

fn has_required_lower(input: &RuleInput<'_>) -> bool {
    !input.policy.require_lower || input.candidate.chars().any(|c| c.is_ascii_lowercase())
}

fn has_required_digit(input: &RuleInput<'_>) -> bool {
    !input.policy.require_digit || input.candidate.chars().any(|c| c.is_ascii_digit())
}

fn matches_confirmation(input: &RuleInput<'_>) -> bool {
    input.candidate == input.confirmation
}

/// Validate a proposed password and its confirmation against `policy`.
///
/// Returns the first failing rule in the order documented at module level.
/// Pure and deterministic: identical inputs always give identical results.
pub fn validate_credential(
    candidate: &str,
    confirmation: &str,
    policy: &PasswordPolicy,
) -> ValidationResult {
    let input = RuleInput {
        candidate,
        confirmation,
        policy,
    };

    match RULES.iter().find(|(_, check)| !check(&input)) {
        Some((reason, _)) => {
            tracing::trace!(reason = reason.code(), "credential rejected");
            ValidationResult::Invalid(*reason)
        }
        None => ValidationResult::Valid,
    }
}
