//! Waymark - Parser and graph builder for directory-based game world maps
//!
//! This crate re-exports all layers of the Waymark system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: waymark_runtime     CLI, report, logging, snapshot export
//! Layer 2: waymark_parser      Directory walker, map parser, diagnostics
//! Layer 1: waymark_world       Areas, locations, graph registry
//! Layer 0: waymark_foundation  Core types (Id, Error, text helpers)
//! ```

pub use waymark_foundation as foundation;
pub use waymark_parser as parser;
pub use waymark_runtime as runtime;
pub use waymark_world as world;
