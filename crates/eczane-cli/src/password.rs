//! # `eczane password`
//!
//! Check a password (and its confirmation) against the configured policy.
//!
//! ```bash
//! eczane password Abcdefg1                       # valid
//! eczane password Abcdefg1 --confirm Abcdefg2    # MISMATCH
//! eczane password abc --policy registration --checklist
//! printf 'Abcdefg1\nAbcdefg1\n' | eczane password - --confirm -
//! ```
//!
//! A `-` in place of the password or the confirmation reads that value from
//! stdin, one line each, password first. Values given on the command line
//! are visible in the process table and shell history.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use eczane_core::{validate_credential, PasswordPolicy, Requirement, ValidationResult};

use crate::config::Locale;
use crate::output::{emit, Invocation, Report};

/// Built-in policies selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyPreset {
    /// Eight characters with upper, lower and digit.
    Strict,
    /// Six characters, no character classes.
    Registration,
}

impl From<PolicyPreset> for PasswordPolicy {
    fn from(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::Strict => PasswordPolicy::strict(),
            PolicyPreset::Registration => PasswordPolicy::registration(),
        }
    }
}

/// Argument value that stands for "read this from stdin".
pub const FROM_STDIN: &str = "-";

/// Arguments for the password subcommand.
#[derive(Args, Debug, Clone)]
pub struct PasswordArgs {
    /// Proposed password. Pass `-` to read it from stdin.
    pub candidate: String,

    /// Confirmation value. Defaults to the candidate itself. Pass `-` to
    /// read it from stdin.
    #[arg(long)]
    pub confirm: Option<String>,

    /// Use a built-in policy instead of the configured one.
    #[arg(long, value_enum)]
    pub policy: Option<PolicyPreset>,

    /// Also list every requirement and whether it is met.
    #[arg(long)]
    pub checklist: bool,
}

#[derive(Debug, Serialize)]
pub struct PasswordReport {
    pub result: ValidationResult,
    /// Turkish message for the failing rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<Requirement>>,
}

impl Report for PasswordReport {
    fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    fn to_text(&self, invocation: &Invocation) -> String {
        let headline = match (self.result.reason(), invocation.config.locale) {
            (None, _) => "valid".to_string(),
            (Some(_), Locale::Tr) => self.message.clone().unwrap_or_default(),
            (Some(reason), Locale::Code) => reason.code().to_string(),
        };

        let mut lines = vec![headline];
        for requirement in self.checklist.iter().flatten() {
            let mark = if requirement.satisfied { "✓" } else { "○" };
            lines.push(format!("{mark} {}", requirement.reason));
        }
        lines.join("\n")
    }
}

/// Replace every `-` value in `args` with the next line of `input`.
///
/// The candidate is read before the confirmation. Only the line terminator
/// is stripped; other whitespace is part of the password.
pub fn read_secrets<R: BufRead>(args: &PasswordArgs, mut input: R) -> Result<PasswordArgs> {
    let mut resolved = args.clone();
    if resolved.candidate == FROM_STDIN {
        resolved.candidate = read_secret_line(&mut input, "password")?;
    }
    if resolved.confirm.as_deref() == Some(FROM_STDIN) {
        resolved.confirm = Some(read_secret_line(&mut input, "confirmation")?);
    }
    Ok(resolved)
}

fn read_secret_line<R: BufRead>(input: &mut R, what: &str) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {what} from stdin"))?;
    if read == 0 {
        bail!("expected {what} on stdin, got end of input");
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(line.as_str());
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

pub fn check_password(args: &PasswordArgs, invocation: &Invocation) -> PasswordReport {
    let policy = args
        .policy
        .map(PasswordPolicy::from)
        .unwrap_or(invocation.config.password_policy);
    tracing::debug!(?policy, "checking password");

    let confirmation = args.confirm.as_deref().unwrap_or(&args.candidate);
    let result = validate_credential(&args.candidate, confirmation, &policy);

    PasswordReport {
        result,
        message: result.reason().map(|reason| reason.message_tr(&policy)),
        checklist: args.checklist.then(|| policy.checklist(&args.candidate)),
    }
}

/// Execute the password subcommand.
pub fn run_password(args: &PasswordArgs, invocation: &Invocation) -> Result<u8> {
    let args = read_secrets(args, std::io::stdin().lock())?;
    emit(&check_password(&args, invocation), invocation)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::CliConfig;
    use eczane_core::CredentialReason;

    fn args(candidate: &str) -> PasswordArgs {
        PasswordArgs {
            candidate: candidate.to_string(),
            confirm: None,
            policy: None,
            checklist: false,
        }
    }

    #[test]
    fn confirmation_defaults_to_candidate() {
        let report = check_password(&args("Abcdefg1"), &Invocation::default());
        assert!(report.is_valid());
        assert_eq!(report.to_text(&Invocation::default()), "valid");
    }

    #[test]
    fn mismatch_reported_as_code() {
        let mut a = args("Abcdefg1");
        a.confirm = Some("Abcdefg2".to_string());
        let report = check_password(&a, &Invocation::default());
        assert_eq!(report.result.reason(), Some(CredentialReason::Mismatch));
        assert_eq!(report.to_text(&Invocation::default()), "MISMATCH");
    }

    #[test]
    fn turkish_locale_prints_message() {
        let invocation = Invocation {
            config: CliConfig {
                locale: Locale::Tr,
                ..CliConfig::default()
            },
            json: false,
        };
        let report = check_password(&args("Ab1"), &invocation);
        assert_eq!(report.to_text(&invocation), "Şifre en az 8 karakter olmalıdır");
    }

    #[test]
    fn preset_overrides_config() {
        let mut a = args("abcdef");
        a.policy = Some(PolicyPreset::Registration);
        assert!(check_password(&a, &Invocation::default()).is_valid());

        a.policy = None;
        assert!(!check_password(&a, &Invocation::default()).is_valid());
    }

    #[test]
    fn configured_policy_is_used() {
        let invocation = Invocation {
            config: CliConfig {
                password_policy: PasswordPolicy::new(3, false, false, false).unwrap(),
                ..CliConfig::default()
            },
            json: false,
        };
        assert!(check_password(&args("abc"), &invocation).is_valid());
    }

    #[test]
    fn checklist_lines() {
        let mut a = args("abc1");
        a.checklist = true;
        let report = check_password(&a, &Invocation::default());
        assert_eq!(
            report.to_text(&Invocation::default()),
            "TOO_SHORT\n○ TOO_SHORT\n○ MISSING_UPPERCASE\n✓ MISSING_LOWERCASE\n✓ MISSING_DIGIT"
        );
    }

    #[test]
    fn json_report_shape() {
        let report = check_password(&args("abcdefgh"), &Invocation::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "result": { "status": "INVALID", "reason": "MISSING_UPPERCASE" },
                "message": "Şifre en az bir büyük harf içermelidir",
            })
        );
    }

    #[test]
    fn literal_arguments_leave_stdin_alone() {
        let mut a = args("Abcdefg1");
        a.confirm = Some("Abcdefg1".to_string());
        let mut input = Cursor::new("unused\n");
        let resolved = read_secrets(&a, &mut input).unwrap();
        assert_eq!(resolved.candidate, "Abcdefg1");
        assert_eq!(resolved.confirm.as_deref(), Some("Abcdefg1"));
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn dash_reads_candidate_then_confirmation() {
        let mut a = args(FROM_STDIN);
        a.confirm = Some(FROM_STDIN.to_string());
        let resolved = read_secrets(&a, Cursor::new("Abcdefg1\r\nAbcdefg2\n")).unwrap();
        assert_eq!(resolved.candidate, "Abcdefg1");
        assert_eq!(resolved.confirm.as_deref(), Some("Abcdefg2"));

        let report = check_password(&resolved, &Invocation::default());
        assert_eq!(report.result.reason(), Some(CredentialReason::Mismatch));
    }

    #[test]
    fn dash_candidate_keeps_inner_whitespace() {
        let resolved = read_secrets(&args(FROM_STDIN), Cursor::new(" Abc defg1 \n")).unwrap();
        assert_eq!(resolved.candidate, " Abc defg1 ");
        assert!(resolved.confirm.is_none());
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let resolved = read_secrets(&args(FROM_STDIN), Cursor::new("Abcdefg1")).unwrap();
        assert!(check_password(&resolved, &Invocation::default()).is_valid());
    }

    #[test]
    fn empty_stdin_is_an_error() {
        let err = read_secrets(&args(FROM_STDIN), Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("password"));

        let mut a = args("Abcdefg1");
        a.confirm = Some(FROM_STDIN.to_string());
        let err = read_secrets(&a, Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("confirmation"));
    }
}
