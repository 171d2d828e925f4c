//! # eczane CLI entry point
//!
//! Parses command-line arguments, loads configuration and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eczane_cli::config::CliConfig;
use eczane_cli::contact::{run_email, run_phone, EmailArgs, PhoneArgs};
use eczane_cli::output::{Invocation, EXIT_ERROR, EXIT_VALID};
use eczane_cli::password::{run_password, PasswordArgs};
use eczane_cli::tckn::{run_tckn, TcknArgs};

/// e-Eczane input checks.
///
/// Validates identity numbers, passwords and contact details with the same
/// rules the registration and password-reset forms apply.
#[derive(Parser, Debug)]
#[command(name = "eczane", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a national identity number (TCKN).
    Tckn(TcknArgs),

    /// Check a password against the configured policy.
    Password(PasswordArgs),

    /// Check an e-mail address.
    Email(EmailArgs),

    /// Check a Turkish phone number.
    Phone(PhoneArgs),
}

/// Exit code for a command line clap refused to parse.
///
/// `--help` and `--version` surface as errors too but are successful runs.
/// Everything else is a usage error and must not collide with the code for
/// rejected input.
fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_VALID,
        _ => EXIT_ERROR,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(e.kind()));
        }
    };

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("eczane CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let invocation = Invocation {
        config,
        json: cli.json,
    };

    let result = match &cli.command {
        Commands::Tckn(args) => run_tckn(args, &invocation),
        Commands::Password(args) => run_password(args, &invocation),
        Commands::Email(args) => run_email(args, &invocation),
        Commands::Phone(args) => run_phone(args, &invocation),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
