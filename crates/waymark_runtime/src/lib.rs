//! CLI, reporting, logging, and export for Waymark.
//!
//! This crate provides:
//! - [`cli`] - Argument parsing and the validate/export/help commands
//! - [`Report`] - Area and location counts of a parse
//! - [`export`] - Snapshot records and the [`Exporter`] seam to storage
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod export;
pub mod logging;
pub mod report;

pub use cli::{CliConfig, Command};
pub use export::{AreaRecord, Exporter, LocationRecord, MessagePackExporter, Snapshot};
pub use report::Report;
