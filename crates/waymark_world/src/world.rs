//! The parsed world: every area plus the location registry.

use std::collections::HashMap;

use waymark_foundation::{Error, ErrorKind, Id, Result};

use crate::area::Area;
use crate::location::Location;
use crate::registry::{Collision, GraphRegistry};

/// Areas in discovery order together with their locations.
///
/// This is what a successful parse hands to the persistence side. Once
/// [`resolve`](Self::resolve) has run, it is read-only.
#[derive(Clone, Debug, Default)]
pub struct World {
    areas: Vec<Area>,
    /// Area label -> position in `areas`.
    area_labels: HashMap<String, usize>,
    /// Area id -> position in `areas`. On a collision the first holder wins.
    area_ids: HashMap<Id, usize>,
    locations: GraphRegistry,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an area.
    ///
    /// Returns the id collision caused by this area, if any.
    ///
    /// # Errors
    ///
    /// Fails if the label is already used by another area or the world is
    /// already resolved.
    pub fn push_area(&mut self, area: Area) -> Result<Option<Collision>> {
        if self.locations.is_resolved() {
            return Err(Error::new(ErrorKind::RegistrySealed));
        }
        if self.area_labels.contains_key(&area.label) {
            return Err(Error::duplicate_label(area.label));
        }

        let index = self.areas.len();
        let collision = match self.area_ids.get(&area.id) {
            Some(&holder) => Some(Collision {
                id: area.id,
                first: self.areas[holder].label.clone(),
                second: area.label.clone(),
            }),
            None => {
                self.area_ids.insert(area.id, index);
                None
            }
        };

        tracing::trace!(label = %area.label, id = %area.id, "registered area");
        self.area_labels.insert(area.label.clone(), index);
        self.areas.push(area);
        Ok(collision)
    }

    /// Resolves every transition target.
    ///
    /// # Errors
    ///
    /// See [`GraphRegistry::resolve_all`].
    pub fn resolve(&mut self) -> Result<()> {
        self.locations.resolve_all()
    }

    /// Areas in discovery order.
    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Looks up an area by id.
    #[must_use]
    pub fn area(&self, id: Id) -> Option<&Area> {
        self.area_ids.get(&id).map(|&index| &self.areas[index])
    }

    /// Looks up an area by label.
    #[must_use]
    pub fn area_by_label(&self, label: &str) -> Option<&Area> {
        self.area_labels.get(label).map(|&index| &self.areas[index])
    }

    /// Follows a location's back-reference to its area.
    #[must_use]
    pub fn location_area(&self, location: &Location) -> Option<&Area> {
        self.area(location.area)
    }

    /// The location registry.
    #[must_use]
    pub fn locations(&self) -> &GraphRegistry {
        &self.locations
    }

    /// Mutable access for the parser while the world is being built.
    pub fn locations_mut(&mut self) -> &mut GraphRegistry {
        &mut self.locations
    }

    /// Whether transitions have been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.locations.is_resolved()
    }
}
