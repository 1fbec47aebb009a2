//! Recoverable formatting diagnostics.
//!
//! A diagnostic never stops parsing and never changes the produced world.
//! Fatal problems are [`waymark_foundation::Error`]s instead.

use std::fmt;

/// The kinds of warning the parser can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// `#` directly followed by text.
    MissingSpaceAfterHash,
    /// `###` directly followed by text.
    MissingSpaceAfterLocationMarker,
    /// `*` directly followed by text.
    MissingSpaceAfterActionMarker,
    /// A non-empty line made only of whitespace.
    WhitespaceOnly,
    /// Text followed by trailing whitespace.
    TrailingWhitespace,
    /// Whitespace before the first character of text.
    LeadingWhitespace,
    /// Whitespace before the first character of text, reported under the
    /// header-placement rule. Fires together with [`Self::LeadingWhitespace`].
    TextBeforeHeader,
    /// An area directory has no map file.
    MissingMap,
    /// Two labels derive the same id.
    IdCollision,
}

impl WarningKind {
    /// The seven line rules, in evaluation order.
    pub const LINE_RULES: [Self; 7] = [
        Self::MissingSpaceAfterHash,
        Self::MissingSpaceAfterLocationMarker,
        Self::MissingSpaceAfterActionMarker,
        Self::WhitespaceOnly,
        Self::TrailingWhitespace,
        Self::LeadingWhitespace,
        Self::TextBeforeHeader,
    ];

    /// Short code of this warning.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingSpaceAfterHash => "W1",
            Self::MissingSpaceAfterLocationMarker => "W2",
            Self::MissingSpaceAfterActionMarker => "W3",
            Self::WhitespaceOnly => "W4",
            Self::TrailingWhitespace => "W5",
            Self::LeadingWhitespace => "W6",
            Self::TextBeforeHeader => "W7",
            Self::MissingMap => "missing-map",
            Self::IdCollision => "id-collision",
        }
    }

    /// Human readable message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingSpaceAfterHash => "missing space after '#'",
            Self::MissingSpaceAfterLocationMarker => "missing space after '###'",
            Self::MissingSpaceAfterActionMarker => "missing space after '*'",
            Self::WhitespaceOnly => "string with spaces only",
            Self::TrailingWhitespace => "string ends with spaces",
            Self::LeadingWhitespace => "string starts with spaces",
            Self::TextBeforeHeader => "non-empty string before area header",
            Self::MissingMap => "area has no map file",
            Self::IdCollision => "id collision",
        }
    }

    /// Whether the offending line is echoed in the report.
    #[must_use]
    pub const fn shows_text(self) -> bool {
        !matches!(self, Self::WhitespaceOnly)
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A warning with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: WarningKind,
    /// File (or directory) the warning refers to.
    pub file: String,
    /// 1-based line, when the warning is about a line.
    pub line: Option<usize>,
    /// The offending text, if shown.
    pub text: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic about a whole file.
    #[must_use]
    pub fn new(kind: WarningKind, file: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.into(),
            line: None,
            text: None,
        }
    }

    /// Creates a diagnostic about one line, echoing the line when the kind
    /// calls for it.
    #[must_use]
    pub fn at_line(kind: WarningKind, file: impl Into<String>, line: usize, text: &str) -> Self {
        Self {
            kind,
            file: file.into(),
            line: Some(line),
            text: kind.shows_text().then(|| text.to_owned()),
        }
    }

    /// Sets the text shown under the message.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Warning: {}", self.kind)?;
        if let Some(text) = &self.text {
            writeln!(f, "    {text}")?;
        }
        match self.line {
            Some(line) => write!(f, "    line {line} in {}", self.file),
            None => write!(f, "    in {}", self.file),
        }
    }
}

/// Warnings collected during a run, in the order they were raised.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.kind.code(),
            file = %diagnostic.file,
            line = ?diagnostic.line,
            "{}",
            diagnostic.kind
        );
        self.entries.push(diagnostic);
    }

    /// Number of warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no warning was raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of warnings of one kind.
    #[must_use]
    pub fn count(&self, kind: WarningKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Iterates in the order raised.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
