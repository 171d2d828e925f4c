//! # eczane-cli — Command-Line Front End for eczane-core
//!
//! Stands in for the web forms: collects a value from the command line,
//! runs the matching eczane-core check, and prints the verdict.
//!
//! ## Subcommands
//!
//! - `tckn` — national identity number
//! - `password` — password policy and confirmation
//! - `email`, `phone` — contact details
//!
//! ## Exit Codes
//!
//! `0` valid, `2` rejected, `1` operational failure (bad config, I/O).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; every check is delegated to eczane-core.
//! - Handlers return a [`output::Report`] so that rendering is testable
//!   without capturing stdout.

pub mod config;
pub mod contact;
pub mod output;
pub mod password;
pub mod tckn;
