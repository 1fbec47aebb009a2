//! Identifiers, errors, and label helpers for Waymark.
//!
//! This crate provides:
//! - [`Id`] and [`identifier`] - Deterministic checksum-derived entity ids
//! - [`Error`] - Fatal error types with file/line context
//! - [`text`] - Label splitting and joining shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{Id, identifier};
