//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Id, Error, and the label text helpers.

mod errors;
