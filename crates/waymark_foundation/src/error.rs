//! Error types for the Waymark system.
//!
//! Every error here is fatal: the run that produced it is abandoned and no
//! part of the world is handed on. Recoverable formatting problems are
//! diagnostics, not errors, and live in the parser crate.

use std::fmt;

use thiserror::Error;

use crate::id::Id;

/// Result alias used across the Waymark crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Waymark operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unresolved transition target error.
    #[must_use]
    pub fn unresolved_target(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedTarget(label.into()))
    }

    /// Creates a duplicate label error.
    #[must_use]
    pub fn duplicate_label(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateLabel(label.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl fmt::Display, err: impl fmt::Display) -> Self {
        Self::new(ErrorKind::IoError(format!("{path}: {err}")))
    }

    /// Returns the short code of this error's kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An area directory name is not of the form `name - label`.
    #[error("can't find label of area in directory '{0}'")]
    AreaLabelMissing(String),

    /// An action line has no target.
    #[error("can't find target of transition")]
    TransitionTargetMissing,

    /// A location header has no label.
    #[error("can't find label of location")]
    LocationLabelMissing,

    /// A location label spans more than one path segment.
    #[error("more than one slash at location label '{0}'")]
    NestedLocationLabel(String),

    /// A transition points at a label that was never defined.
    #[error("required location not exists: {0}")]
    UnresolvedTarget(String),

    /// The `#` title of a map file differs from its directory name.
    #[error("area's names from directory and file not equals: expected '{expected}', found '{found}'")]
    AreaNameMismatch {
        /// Name derived from the directory.
        expected: String,
        /// Name declared in the map file.
        found: String,
    },

    /// An area or location label was registered twice.
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// An action line appeared before any location header.
    #[error("transition outside of any location")]
    ActionOutsideLocation,

    /// Two distinct labels derive the same id.
    #[error("id {id} is shared by '{first}' and '{second}'")]
    IdCollision {
        /// The shared id.
        id: Id,
        /// Label that claimed the id first.
        first: String,
        /// Label that collided with it.
        second: String,
    },

    /// The registry was modified after resolution.
    #[error("location registry is already resolved")]
    RegistrySealed,

    /// The world was used before its transitions were resolved.
    #[error("location registry is not resolved yet")]
    RegistryUnresolved,

    /// The requested input path does not exist.
    #[error("path not exists: {0}")]
    PathNotFound(String),

    /// File system failure.
    #[error("io error: {0}")]
    IoError(String),

    /// Export encoding failure.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

impl ErrorKind {
    /// Returns the short code used when reporting this error.
    ///
    /// The six format violations carry the codes `F1` to `F6`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AreaLabelMissing(_) => "F1",
            Self::TransitionTargetMissing => "F2",
            Self::LocationLabelMissing => "F3",
            Self::NestedLocationLabel(_) => "F4",
            Self::UnresolvedTarget(_) => "F5",
            Self::AreaNameMismatch { .. } => "F6",
            Self::DuplicateLabel(_) => "duplicate-label",
            Self::ActionOutsideLocation => "orphan-action",
            Self::IdCollision { .. } => "id-collision",
            Self::RegistrySealed => "registry-sealed",
            Self::RegistryUnresolved => "registry-unresolved",
            Self::PathNotFound(_) => "path",
            Self::IoError(_) => "io",
            Self::SerializationError(_) => "serialization",
            Self::Usage(_) => "usage",
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file.
    pub source: Option<String>,
    /// 1-based line number in source.
    pub line: Option<usize>,
    /// The offending line.
    pub text: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            writeln!(f, "    {text}")?;
        }
        match (self.line, &self.source) {
            (Some(line), Some(source)) => write!(f, "    line {line} in {source}"),
            (None, Some(source)) => write!(f, "    in {source}"),
            (Some(line), None) => write!(f, "    line {line}"),
            (None, None) => Ok(()),
        }
    }
}
