//! Export of a resolved world.
//!
//! The world is flattened into a [`Snapshot`] of plain records, one per area
//! and one per location, shaped like the rows a storage backend keeps. An
//! [`Exporter`] takes it from there; [`MessagePackExporter`] writes it to a
//! file using the `MessagePack` binary format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use waymark_foundation::{Error, ErrorKind, Id, Result};
use waymark_world::{Area, Location, World};

/// One stored area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRecord {
    /// Area id.
    pub id: Id,
    /// Area label.
    pub label: String,
    /// Display name.
    pub title: String,
    /// Trimmed description.
    pub description: String,
}

impl From<&Area> for AreaRecord {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id,
            label: area.label.clone(),
            title: area.name.clone(),
            description: area.description.clone(),
        }
    }
}

/// One stored location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Location id.
    pub id: Id,
    /// Namespaced label.
    pub label: String,
    /// Display name.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// Id of the owning area.
    pub area: Id,
    /// `(action, target id)` in declaration order.
    pub goto: Vec<(String, Id)>,
    /// Whether players start here. Nothing in a map sets it.
    pub is_default: bool,
}

impl LocationRecord {
    /// Builds the record of a resolved location.
    ///
    /// # Errors
    ///
    /// Fails if a transition has not been resolved.
    pub fn from_location(location: &Location) -> Result<Self> {
        let goto = location
            .actions
            .iter()
            .map(|(name, transition)| {
                transition
                    .target_id()
                    .map(|id| (name.to_owned(), id))
                    .ok_or_else(|| Error::new(ErrorKind::RegistryUnresolved))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: location.id,
            label: location.label.clone(),
            title: location.name.clone(),
            description: location.description.clone(),
            area: location.area,
            goto,
            is_default: false,
        })
    }

    /// Renders the transitions as `action=id|action=id`.
    #[must_use]
    pub fn goto_string(&self) -> String {
        self.goto
            .iter()
            .map(|(name, id)| format!("{name}={id}"))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Every record of a world, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Area records.
    pub areas: Vec<AreaRecord>,
    /// Location records.
    pub locations: Vec<LocationRecord>,
}

impl Snapshot {
    /// Flattens a resolved world.
    ///
    /// # Errors
    ///
    /// Fails if the world has not been resolved.
    pub fn from_world(world: &World) -> Result<Self> {
        if !world.is_resolved() {
            return Err(Error::new(ErrorKind::RegistryUnresolved));
        }
        Ok(Self {
            areas: world.areas().iter().map(AreaRecord::from).collect(),
            locations: world
                .locations()
                .iter()
                .map(LocationRecord::from_location)
                .collect::<Result<_>>()?,
        })
    }

    /// Serializes to `MessagePack` bytes, keeping field names.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }

    /// Deserializes from `MessagePack` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }
}

/// Hands a resolved world to storage.
pub trait Exporter {
    /// Stores the world.
    ///
    /// # Errors
    ///
    /// Returns an error if the world is unresolved or storage fails.
    fn export(&mut self, world: &World) -> Result<()>;
}

/// Writes the snapshot of a world to a `MessagePack` file.
#[derive(Clone, Debug)]
pub struct MessagePackExporter {
    path: PathBuf,
}

impl MessagePackExporter {
    /// Creates an exporter writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for MessagePackExporter {
    fn export(&mut self, world: &World) -> Result<()> {
        let bytes = Snapshot::from_world(world)?.to_bytes()?;
        let shown = self.path.display();

        let file = File::create(&self.path)
            .map_err(|e| Error::io(format!("failed to create file '{shown}'"), e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .map_err(|e| Error::io(format!("failed to write to file '{shown}'"), e))?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush file '{shown}'"), e))?;

        tracing::info!(
            path = %shown,
            areas = world.areas().len(),
            locations = world.locations().len(),
            "exported world"
        );
        Ok(())
    }
}
