//! Shared invocation context and result rendering.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::CliConfig;

/// Exit code for input that passed every check.
pub const EXIT_VALID: u8 = 0;
/// Exit code for input that was rejected.
pub const EXIT_INVALID: u8 = 2;
/// Exit code for bad invocations, configuration and I/O failures.
pub const EXIT_ERROR: u8 = 1;

/// Everything a subcommand needs besides its own arguments.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub config: CliConfig,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// A subcommand outcome that can be printed either way.
pub trait Report: Serialize {
    fn is_valid(&self) -> bool;

    /// Plain-text rendering, one item per line.
    fn to_text(&self, invocation: &Invocation) -> String;
}

/// Render `report` in the requested format.
pub fn render<R: Report>(report: &R, invocation: &Invocation) -> Result<String> {
    if invocation.json {
        serde_json::to_string_pretty(report).context("failed to serialize report")
    } else {
        Ok(report.to_text(invocation))
    }
}

/// Exit code for a finished check.
pub fn exit_code<R: Report>(report: &R) -> u8 {
    if report.is_valid() {
        EXIT_VALID
    } else {
        EXIT_INVALID
    }
}

/// Print `report` to stdout and map it to an exit code.
pub fn emit<R: Report>(report: &R, invocation: &Invocation) -> Result<u8> {
    println!("{}", render(report, invocation)?);
    Ok(exit_code(report))
}
