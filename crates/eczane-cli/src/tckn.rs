//! # `eczane tckn`
//!
//! Check a Turkish national identity number.
//!
//! ```bash
//! eczane tckn 10000000146          # valid 100***146
//! eczane --json tckn 12345678901   # {"valid": false}
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use eczane_core::Tckn;

use crate::output::{emit, Invocation, Report};

/// Arguments for the tckn subcommand.
#[derive(Args, Debug)]
pub struct TcknArgs {
    /// Eleven-digit identity number.
    pub value: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TcknReport {
    pub valid: bool,
    /// Masked form, present only for valid numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
}

impl Report for TcknReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn to_text(&self, _invocation: &Invocation) -> String {
        match &self.masked {
            Some(masked) => format!("valid {masked}"),
            None => "invalid".to_string(),
        }
    }
}

pub fn check_tckn(args: &TcknArgs) -> TcknReport {
    match Tckn::new(args.value.trim()) {
        Ok(tckn) => TcknReport {
            valid: true,
            masked: Some(tckn.masked()),
        },
        Err(e) => {
            tracing::info!("{e}");
            TcknReport {
                valid: false,
                masked: None,
            }
        }
    }
}

/// Execute the tckn subcommand.
pub fn run_tckn(args: &TcknArgs, invocation: &Invocation) -> Result<u8> {
    emit(&check_tckn(args), invocation)
}
