//! Locations and their outgoing transitions.

use indexmap::IndexMap;
use waymark_foundation::{Id, identifier};

/// Where a location was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    /// Map file path as displayed in diagnostics.
    pub file: String,
    /// 1-based line of the location header.
    pub line: usize,
}

impl Origin {
    /// Creates an origin.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// A player action leading to another location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Fully namespaced target label as written in the map.
    pub target: String,
    /// 1-based line of the action in its map file.
    pub line: usize,
    resolved: Option<Id>,
}

impl Transition {
    /// Creates an unresolved transition.
    #[must_use]
    pub fn new(target: impl Into<String>, line: usize) -> Self {
        Self {
            target: target.into(),
            line,
            resolved: None,
        }
    }

    /// Returns the target id once the registry has been resolved.
    #[must_use]
    pub fn target_id(&self) -> Option<Id> {
        self.resolved
    }

    pub(crate) fn resolve(&mut self, id: Id) {
        self.resolved = Some(id);
    }
}

/// Actions of a location, in declaration order.
///
/// Declaring the same action name twice replaces the target but keeps the
/// position of the first declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Actions {
    entries: IndexMap<String, Transition>,
}

impl Actions {
    /// Creates an empty action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an action. Returns the replaced transition, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        transition: Transition,
    ) -> Option<Transition> {
        self.entries.insert(name.into(), transition)
    }

    /// Looks up an action by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Transition> {
        self.entries.get(name)
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, transition)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Transition)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub(crate) fn transitions_mut(&mut self) -> impl Iterator<Item = &mut Transition> {
        self.entries.values_mut()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = (&'a String, &'a Transition);
    type IntoIter = indexmap::map::Iter<'a, String, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// An addressable point within an area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Id derived from the label.
    pub id: Id,
    /// Namespaced label, `<area-label>/<slug>`.
    pub label: String,
    /// Display name from the header.
    pub name: String,
    /// Free text of the location block, trimmed.
    pub description: String,
    /// Id of the owning area.
    pub area: Id,
    /// Outgoing transitions.
    pub actions: Actions,
    /// Declaration site, when parsed from a file.
    pub origin: Option<Origin>,
}

impl Location {
    /// Creates a location, deriving its id from `label`.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        area: Id,
        actions: Actions,
    ) -> Self {
        let label = label.into();
        Self {
            id: identifier(&label),
            label,
            name: name.into(),
            description: description.into(),
            area,
            actions,
            origin: None,
        }
    }

    /// Records where the location was declared.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The slug part of the label, after the area namespace.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.label
            .rsplit_once(waymark_foundation::text::NAMESPACE)
            .map_or(self.label.as_str(), |(_, slug)| slug)
    }
}
