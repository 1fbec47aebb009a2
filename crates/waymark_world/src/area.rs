//! Areas: named regions backed by one directory and one map file.

use waymark_foundation::{Id, identifier};

/// A named region of the game world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
    /// Id derived from the label.
    pub id: Id,
    /// Path-derived label, unique across the world.
    pub label: String,
    /// Display name taken from the directory name.
    pub name: String,
    /// Free text from the map file, trimmed.
    pub description: String,
}

impl Area {
    /// Creates an area, deriving its id from `label`.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let label = label.into();
        Self {
            id: identifier(&label),
            label,
            name: name.into(),
            description: description.into(),
        }
    }
}
