//! The location graph registry.
//!
//! Locations are pushed in discovery order while the tree is walked. Once
//! everything is known, [`GraphRegistry::resolve_all`] turns every raw target
//! label into the id of an existing location. Resolution happens only after
//! the walk so that a transition may point at a location discovered later.

use std::collections::HashMap;

use waymark_foundation::{Error, ErrorContext, ErrorKind, Id, Result};

use crate::location::Location;

/// Lifecycle of a [`GraphRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryState {
    /// Accepting pushes; targets are raw labels.
    Building,
    /// Read-only; every target has an id.
    Resolved,
}

/// Two distinct labels deriving the same id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    /// The shared id.
    pub id: Id,
    /// Label that claimed the id first.
    pub first: String,
    /// Label that was pushed later.
    pub second: String,
}

impl Collision {
    /// Converts the collision into a fatal error.
    #[must_use]
    pub fn into_error(self) -> Error {
        Error::new(ErrorKind::IdCollision {
            id: self.id,
            first: self.first,
            second: self.second,
        })
    }
}

/// Append-only store of locations with label and id indexes.
#[derive(Clone, Debug)]
pub struct GraphRegistry {
    /// Locations in discovery order.
    locations: Vec<Location>,
    /// Label -> position in `locations`.
    labels: HashMap<String, usize>,
    /// Id -> position in `locations`. On a collision the first holder wins.
    ids: HashMap<Id, usize>,
    /// Collisions seen so far.
    collisions: Vec<Collision>,
    state: RegistryState,
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRegistry {
    /// Creates an empty registry in the building state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            labels: HashMap::new(),
            ids: HashMap::new(),
            collisions: Vec::new(),
            state: RegistryState::Building,
        }
    }

    /// Appends a location.
    ///
    /// Returns the id collision caused by this location, if any. The location
    /// is stored either way; only the id index keeps pointing at the earlier
    /// holder.
    ///
    /// # Errors
    ///
    /// Fails if the label is already registered or the registry is resolved.
    pub fn push(&mut self, location: Location) -> Result<Option<Collision>> {
        if self.state == RegistryState::Resolved {
            return Err(Error::new(ErrorKind::RegistrySealed));
        }
        if self.labels.contains_key(&location.label) {
            let mut err = Error::duplicate_label(location.label.clone());
            if let Some(origin) = &location.origin {
                err = err.with_context(
                    ErrorContext::new()
                        .with_source(origin.file.clone())
                        .with_line(origin.line),
                );
            }
            return Err(err);
        }

        let index = self.locations.len();
        let collision = match self.ids.get(&location.id) {
            Some(&holder) => {
                let collision = Collision {
                    id: location.id,
                    first: self.locations[holder].label.clone(),
                    second: location.label.clone(),
                };
                self.collisions.push(collision.clone());
                Some(collision)
            }
            None => {
                self.ids.insert(location.id, index);
                None
            }
        };

        tracing::trace!(label = %location.label, id = %location.id, "registered location");
        self.labels.insert(location.label.clone(), index);
        self.locations.push(location);
        Ok(collision)
    }

    /// Looks up the id of a label.
    ///
    /// # Errors
    ///
    /// Fails with an unresolved target error if the label is unknown.
    pub fn resolve_label(&self, label: &str) -> Result<Id> {
        self.labels
            .get(label)
            .map(|&index| self.locations[index].id)
            .ok_or_else(|| Error::unresolved_target(label))
    }

    /// Resolves every transition target and seals the registry.
    ///
    /// Locations are visited in discovery order and actions in declaration
    /// order; the first unknown target aborts and leaves the registry
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown target, or if already resolved.
    pub fn resolve_all(&mut self) -> Result<()> {
        if self.state == RegistryState::Resolved {
            return Err(Error::new(ErrorKind::RegistrySealed));
        }

        let mut resolved = Vec::with_capacity(self.locations.len());
        for location in &self.locations {
            let ids = location
                .actions
                .iter()
                .map(|(name, transition)| {
                    self.resolve_label(&transition.target).map_err(|err| {
                        let mut ctx = ErrorContext::new()
                            .with_line(transition.line)
                            .with_text(format!("* {name} - {}", transition.target));
                        if let Some(origin) = &location.origin {
                            ctx = ctx.with_source(origin.file.clone());
                        }
                        err.with_context(ctx)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            resolved.push(ids);
        }

        for (location, ids) in self.locations.iter_mut().zip(resolved) {
            for (transition, id) in location.actions.transitions_mut().zip(ids) {
                transition.resolve(id);
            }
        }

        self.state = RegistryState::Resolved;
        tracing::debug!(locations = self.locations.len(), "resolved location graph");
        Ok(())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Whether [`resolve_all`](Self::resolve_all) has completed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.state == RegistryState::Resolved
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no location has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Whether a label is registered.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Looks up a location by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Location> {
        self.labels.get(label).map(|&index| &self.locations[index])
    }

    /// Looks up a location by id.
    #[must_use]
    pub fn by_id(&self, id: Id) -> Option<&Location> {
        self.ids.get(&id).map(|&index| &self.locations[index])
    }

    /// Iterates over locations in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Id collisions recorded while pushing.
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

impl<'a> IntoIterator for &'a GraphRegistry {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
