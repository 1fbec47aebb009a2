//! Map file parser.
//!
//! A map file describes one area. Its grammar is line based:
//!
//! ```text
//! # Town                      area title, must match the directory name
//! Free text                   area description
//! ### Square - square         location header: name - label
//! A quiet square.             location description
//! * north - gate              action: name - target label
//! ```
//!
//! Targets without a `/` are taken relative to the current area. Locations
//! are pushed into the registry as soon as their block is complete; the
//! targets stay raw labels until the registry is resolved.

use waymark_foundation::text::{self, NAMESPACE};
use waymark_foundation::{Error, ErrorContext, ErrorKind, Id, Result, identifier};
use waymark_world::{Actions, Area, Collision, GraphRegistry, Location, Origin, Transition};

use crate::classify::LineClassifier;
use crate::config::CollisionPolicy;
use crate::diagnostic::{Diagnostic, Diagnostics, WarningKind};

const TITLE: &str = "# ";
const LOCATION: &str = "### ";
const ACTION: &str = "* ";

/// A location whose block is still being read.
#[derive(Debug)]
struct Draft {
    label: String,
    name: String,
    description: String,
    actions: Actions,
    line: usize,
}

/// Parser state between lines.
#[derive(Debug)]
enum State {
    /// Before the first location header.
    InArea,
    /// Inside a location block.
    InLocation(Draft),
}

/// Parses one map file into an [`Area`] and its locations.
pub struct AreaMapParser<'a> {
    file: String,
    label: String,
    name: String,
    area_id: Id,
    description: String,
    state: State,
    registry: &'a mut GraphRegistry,
    diagnostics: &'a mut Diagnostics,
    collisions: CollisionPolicy,
}

impl<'a> AreaMapParser<'a> {
    /// Creates a parser for the area `label` whose directory is named `name`.
    ///
    /// `file` is only used in diagnostics.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        label: impl Into<String>,
        name: impl Into<String>,
        registry: &'a mut GraphRegistry,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        let label = label.into();
        Self {
            file: file.into(),
            area_id: identifier(&label),
            label,
            name: name.into(),
            description: String::new(),
            state: State::InArea,
            registry,
            diagnostics,
            collisions: CollisionPolicy::Warn,
        }
    }

    /// Builder method to set the id collision policy.
    #[must_use]
    pub fn with_collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Parses the whole map text and returns the finished area.
    ///
    /// # Errors
    ///
    /// Returns the first fatal condition met; nothing after it is parsed.
    pub fn parse(mut self, source: &str) -> Result<Area> {
        for (index, line) in text::lines(source).enumerate() {
            self.line(index + 1, line)?;
        }
        self.close_location()?;

        tracing::debug!(area = %self.label, file = %self.file, "parsed map");
        Ok(Area::new(
            self.label,
            self.name,
            text::trim_block(&self.description),
        ))
    }

    fn line(&mut self, number: usize, line: &str) -> Result<()> {
        for kind in LineClassifier::classify(line) {
            self.diagnostics
                .push(Diagnostic::at_line(kind, self.file.clone(), number, line));
        }

        if let Some(title) = line.strip_prefix(TITLE) {
            tracing::trace!(line = number, "area title");
            if title != self.name {
                return Err(fatal(
                    &self.file,
                    ErrorKind::AreaNameMismatch {
                        expected: self.name.clone(),
                        found: title.to_owned(),
                    },
                    number,
                    line,
                ));
            }
        } else if let Some(header) = line.strip_prefix(LOCATION) {
            tracing::trace!(line = number, "location header");
            self.open_location(number, line, header)?;
        } else if let Some(action) = line.strip_prefix(ACTION) {
            tracing::trace!(line = number, "action");
            self.add_action(number, line, action)?;
        } else {
            let buffer = match &mut self.state {
                State::InLocation(draft) => &mut draft.description,
                State::InArea => &mut self.description,
            };
            buffer.push_str(line);
            buffer.push('\n');
        }
        Ok(())
    }

    fn open_location(&mut self, number: usize, line: &str, header: &str) -> Result<()> {
        let Some((name, slug)) = text::split_labelled(header) else {
            return Err(fatal(&self.file, ErrorKind::LocationLabelMissing, number, line));
        };
        if slug.contains(NAMESPACE) {
            return Err(fatal(
                &self.file,
                ErrorKind::NestedLocationLabel(slug.to_owned()),
                number,
                line,
            ));
        }

        self.close_location()?;

        let label = format!("{}{NAMESPACE}{slug}", self.label);
        if self.registry.contains(&label) {
            return Err(fatal(
                &self.file,
                ErrorKind::DuplicateLabel(label),
                number,
                line,
            ));
        }
        self.check_collision(number, line, &label)?;
        self.state = State::InLocation(Draft {
            label,
            name: name.to_owned(),
            description: String::new(),
            actions: Actions::new(),
            line: number,
        });
        Ok(())
    }

    fn add_action(&mut self, number: usize, line: &str, action: &str) -> Result<()> {
        let Some((name, target)) = text::split_labelled(action) else {
            return Err(fatal(
                &self.file,
                ErrorKind::TransitionTargetMissing,
                number,
                line,
            ));
        };
        let target = text::namespaced(&self.label, target);

        let State::InLocation(draft) = &mut self.state else {
            return Err(fatal(
                &self.file,
                ErrorKind::ActionOutsideLocation,
                number,
                line,
            ));
        };
        draft.actions.insert(name, Transition::new(target, number));
        Ok(())
    }

    /// Pushes the open location, if any, into the registry.
    fn close_location(&mut self) -> Result<()> {
        let State::InLocation(draft) = std::mem::replace(&mut self.state, State::InArea) else {
            return Ok(());
        };

        let location = Location::new(
            draft.label,
            draft.name,
            text::trim_block(&draft.description),
            self.area_id,
            draft.actions,
        )
        .with_origin(Origin::new(self.file.clone(), draft.line));

        // Id collisions were reported when the header was read.
        self.registry.push(location)?;
        Ok(())
    }

    /// Reports a new label whose id is already held by another location.
    fn check_collision(&mut self, number: usize, line: &str, label: &str) -> Result<()> {
        let id = identifier(label);
        let Some(holder) = self.registry.by_id(id) else {
            return Ok(());
        };
        let collision = Collision {
            id,
            first: holder.label.clone(),
            second: label.to_owned(),
        };

        match self.collisions {
            CollisionPolicy::Ignore => {}
            CollisionPolicy::Warn => self.diagnostics.push(
                Diagnostic::at_line(WarningKind::IdCollision, self.file.clone(), number, line)
                    .with_text(format!(
                        "id {} of '{}' is already used by '{}'",
                        collision.id, collision.second, collision.first
                    )),
            ),
            CollisionPolicy::Fail => {
                return Err(fatal(&self.file, collision.into_error().kind, number, line));
            }
        }
        Ok(())
    }
}

fn fatal(file: &str, kind: ErrorKind, number: usize, line: &str) -> Error {
    Error::new(kind).with_context(
        ErrorContext::new()
            .with_source(file)
            .with_line(number)
            .with_text(line),
    )
}
