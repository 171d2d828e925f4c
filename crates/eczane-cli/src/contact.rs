//! # `eczane email` / `eczane phone`
//!
//! Contact detail checks as run by the registration forms.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use eczane_core::{format_phone_number, is_valid_email, is_valid_phone};

use crate::output::{emit, Invocation, Report};

/// Arguments for the email subcommand.
#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Address to check.
    pub value: String,
}

/// Arguments for the phone subcommand.
#[derive(Args, Debug)]
pub struct PhoneArgs {
    /// Number to check; spaces are ignored.
    pub value: String,

    /// Also print the number as `(XXX) XXX XX XX`.
    #[arg(long)]
    pub format: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl Report for ContactReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn to_text(&self, _invocation: &Invocation) -> String {
        let verdict = if self.valid { "valid" } else { "invalid" };
        match &self.formatted {
            Some(formatted) => format!("{verdict} {formatted}"),
            None => verdict.to_string(),
        }
    }
}

pub fn check_email(args: &EmailArgs) -> ContactReport {
    ContactReport {
        valid: is_valid_email(&args.value),
        formatted: None,
    }
}

pub fn check_phone(args: &PhoneArgs) -> ContactReport {
    ContactReport {
        valid: is_valid_phone(&args.value),
        formatted: args.format.then(|| format_phone_number(&args.value)),
    }
}

/// Execute the email subcommand.
pub fn run_email(args: &EmailArgs, invocation: &Invocation) -> Result<u8> {
    emit(&check_email(args), invocation)
}

/// Execute the phone subcommand.
pub fn run_phone(args: &PhoneArgs, invocation: &Invocation) -> Result<u8> {
    emit(&check_phone(args), invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_verdicts() {
        let ok = check_email(&EmailArgs {
            value: "eczane@example.com".into(),
        });
        assert_eq!(ok.to_text(&Invocation::default()), "valid");

        let bad = check_email(&EmailArgs {
            value: "eczane@".into(),
        });
        assert!(!bad.is_valid());
    }

    #[test]
    fn phone_with_formatting() {
        let report = check_phone(&PhoneArgs {
            value: "532 123 45 67".into(),
            format: true,
        });
        assert_eq!(report.to_text(&Invocation::default()), "valid (532) 123 45 67");
    }

    #[test]
    fn phone_without_formatting() {
        let report = check_phone(&PhoneArgs {
            value: "123".into(),
            format: false,
        });
        assert_eq!(
            report,
            ContactReport {
                valid: false,
                formatted: None
            }
        );
    }
}
