//! Formatting rules applied to every raw map line.
//!
//! The rules look only at the line itself, never at parser state, and run
//! before the line is interpreted.

use waymark_foundation::text::is_space;

use crate::diagnostic::WarningKind;

/// Checks single lines against the formatting rules.
pub struct LineClassifier;

impl LineClassifier {
    /// Returns every rule the line violates, in rule order.
    #[must_use]
    pub fn classify(line: &str) -> Vec<WarningKind> {
        WarningKind::LINE_RULES
            .into_iter()
            .filter(|&kind| Self::violates(kind, line))
            .collect()
    }

    /// Whether `line` violates the rule of `kind`.
    ///
    /// Kinds that are not line rules never match.
    #[must_use]
    pub fn violates(kind: WarningKind, line: &str) -> bool {
        match kind {
            WarningKind::MissingSpaceAfterHash => {
                marker_glued(line, "#", |c| c != '#' && c != ' ')
            }
            WarningKind::MissingSpaceAfterLocationMarker => {
                marker_glued(line, "###", |c| c != ' ')
            }
            WarningKind::MissingSpaceAfterActionMarker => {
                marker_glued(line, "*", |c| c != ' ' && c != '*')
            }
            WarningKind::WhitespaceOnly => !line.is_empty() && line.chars().all(is_space),
            WarningKind::TrailingWhitespace => {
                line.ends_with(is_space) && line.chars().any(|c| !is_space(c))
            }
            WarningKind::LeadingWhitespace | WarningKind::TextBeforeHeader => {
                line.starts_with(is_space) && line.chars().any(|c| !is_space(c))
            }
            WarningKind::MissingMap | WarningKind::IdCollision => false,
        }
    }
}

/// `marker`, then a character accepted by `glued`, then at least one more
/// byte.
fn marker_glued(line: &str, marker: &str, glued: impl Fn(char) -> bool) -> bool {
    let Some(rest) = line.strip_prefix(marker) else {
        return false;
    };
    // Byte length: a lone multi-byte character after the marker counts.
    rest.chars().next().is_some_and(glued) && rest.len() > 1
}
