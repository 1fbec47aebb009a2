//! Directory walker.
//!
//! Every directory below the root is an area named `<Display Name> - <label>`.
//! Nested areas chain their labels onto their parent's with `-`, so
//! `World - world/Town - town` is the area `world-town`. Each area directory
//! may hold a map file describing the area's locations.
//!
//! The walk is depth-first and pre-order: an area's map is parsed before any
//! of its sub-areas. Entries are visited in file-name order unless sorting is
//! turned off.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};
use waymark_foundation::text;
use waymark_foundation::{Error, ErrorContext, ErrorKind, Result};
use waymark_world::World;

use crate::config::{CollisionPolicy, ParseConfig};
use crate::decode::{decode, decode_name};
use crate::diagnostic::{Diagnostic, Diagnostics, WarningKind};
use crate::map::AreaMapParser;

/// Result of a successful walk.
#[derive(Debug)]
pub struct ParseOutput {
    /// The resolved world.
    pub world: World,
    /// Every warning raised, in the order raised.
    pub diagnostics: Diagnostics,
}

/// Walks an area tree and builds the world.
#[derive(Clone, Debug, Default)]
pub struct DirectoryWalker {
    config: ParseConfig,
}

impl DirectoryWalker {
    /// Creates a walker with the given configuration.
    #[must_use]
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The walker's configuration.
    #[must_use]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Walks `root`, parses every area, and resolves all transitions.
    ///
    /// # Errors
    ///
    /// Returns the first fatal condition; no partial world is returned.
    pub fn walk(&self, root: &Path) -> Result<ParseOutput> {
        let mut diagnostics = Diagnostics::new();
        let world = self.walk_collecting(root, &mut diagnostics)?;
        Ok(ParseOutput { world, diagnostics })
    }

    /// Like [`walk`](Self::walk), but collects warnings into `diagnostics`
    /// so the ones raised before a fatal condition are kept.
    ///
    /// # Errors
    ///
    /// Returns the first fatal condition; no partial world is returned.
    pub fn walk_collecting(&self, root: &Path, diagnostics: &mut Diagnostics) -> Result<World> {
        let mut world = self.build(root, diagnostics)?;
        world.resolve()?;

        tracing::info!(
            areas = world.areas().len(),
            locations = world.locations().len(),
            warnings = diagnostics.len(),
            "parsed world"
        );
        Ok(world)
    }

    /// Walks `root` and parses every area without resolving transitions.
    ///
    /// # Errors
    ///
    /// Returns the first fatal condition met during the walk.
    pub fn walk_unresolved(&self, root: &Path) -> Result<ParseOutput> {
        let mut diagnostics = Diagnostics::new();
        let world = self.build(root, &mut diagnostics)?;
        Ok(ParseOutput { world, diagnostics })
    }

    fn build(&self, root: &Path, diagnostics: &mut Diagnostics) -> Result<World> {
        if !root.is_dir() {
            return Err(Error::new(ErrorKind::PathNotFound(
                root.display().to_string(),
            )));
        }

        let mut world = World::new();
        // Labels of the ancestors of the current entry, indexed by depth - 1.
        let mut chain: Vec<String> = Vec::new();

        let mut walk = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_links);
        if self.config.sort_entries {
            walk = walk.sort_by_file_name();
        }
        let entries = walk
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.hidden(entry));

        for entry in entries {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                Error::io(path, err)
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }

            chain.truncate(entry.depth() - 1);
            let label = self.visit_area(&entry, chain.last(), &mut world, diagnostics)?;
            chain.push(label);
        }

        Ok(world)
    }

    fn hidden(&self, entry: &DirEntry) -> bool {
        self.config
            .is_hidden(&entry.file_name().to_string_lossy())
    }

    /// Parses one area directory and returns its label.
    fn visit_area(
        &self,
        entry: &DirEntry,
        parent: Option<&String>,
        world: &mut World,
        diagnostics: &mut Diagnostics,
    ) -> Result<String> {
        let dir = entry.path();
        let dir_name = decode_name(entry.file_name());
        let Some((name, label)) = text::split_labelled(&dir_name) else {
            return Err(Error::new(ErrorKind::AreaLabelMissing(dir_name.clone()))
                .with_context(ErrorContext::new().with_source(dir.display().to_string())));
        };
        let label = text::chained(parent.map(String::as_str), label);
        tracing::debug!(area = %label, name, dir = %dir.display(), "entering area");

        if world.area_by_label(&label).is_some() {
            return Err(Error::duplicate_label(label)
                .with_context(ErrorContext::new().with_source(dir.display().to_string())));
        }

        let map_path = dir.join(&self.config.map_file);
        let file = map_path.display().to_string();
        let source = match fs::read(&map_path) {
            Ok(bytes) => decode(&bytes).into_owned(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                diagnostics.push(Diagnostic::new(WarningKind::MissingMap, file.clone()));
                String::new()
            }
            Err(err) => return Err(Error::io(&file, err)),
        };

        let area = AreaMapParser::new(
            file.clone(),
            label.clone(),
            name,
            world.locations_mut(),
            diagnostics,
        )
        .with_collisions(self.config.collisions)
        .parse(&source)?;

        if let Some(collision) = world.push_area(area)? {
            match self.config.collisions {
                CollisionPolicy::Ignore => {}
                CollisionPolicy::Warn => diagnostics.push(
                    Diagnostic::new(WarningKind::IdCollision, file).with_text(format!(
                        "id {} of area '{}' is already used by '{}'",
                        collision.id, collision.second, collision.first
                    )),
                ),
                CollisionPolicy::Fail => {
                    return Err(collision
                        .into_error()
                        .with_context(ErrorContext::new().with_source(file)));
                }
            }
        }

        Ok(label)
    }
}
