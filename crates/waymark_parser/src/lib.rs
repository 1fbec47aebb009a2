//! Map file grammar, formatting diagnostics, and directory walker.
//!
//! # Architecture
//!
//! ```text
//! root/
//!   World - world/            ─┐
//!     map.ht.md                │ DirectoryWalker: area labels from names
//!     Town - town/             │
//!       map.ht.md             ─┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINE CLASSIFIER │  → warnings (W1..W7), never fatal
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AREA MAP PARSER │  → Area + Locations with raw target labels
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAPH REGISTRY  │  → every target resolved to a location id
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`classify`] - Formatting rules for single lines
//! - [`config`] - Walker and parser configuration
//! - [`decode`] - UTF-8 / Windows-1251 detection
//! - [`diagnostic`] - Recoverable warnings
//! - [`map`] - Map file state machine
//! - [`walker`] - Directory traversal and label chaining

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod config;
pub mod decode;
pub mod diagnostic;
pub mod map;
pub mod walker;

use std::path::Path;

use waymark_foundation::Result;

pub use classify::LineClassifier;
pub use config::{CollisionPolicy, DEFAULT_MAP_FILE, ParseConfig};
pub use diagnostic::{Diagnostic, Diagnostics, WarningKind};
pub use map::AreaMapParser;
pub use walker::{DirectoryWalker, ParseOutput};

/// Walks `root` with `config` and returns the resolved world.
///
/// # Errors
///
/// Returns the first fatal condition met.
pub fn parse_tree(root: &Path, config: ParseConfig) -> Result<ParseOutput> {
    DirectoryWalker::new(config).walk(root)
}
