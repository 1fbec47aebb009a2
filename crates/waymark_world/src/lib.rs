//! Areas, locations, and the location graph registry for Waymark.
//!
//! This crate provides:
//! - [`Area`] - A named region of the game world
//! - [`Location`] and [`Actions`] - Addressable points and their transitions
//! - [`GraphRegistry`] - Append-only location store with label resolution
//! - [`World`] - The area list and registry produced by one parse

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod area;
pub mod location;
pub mod registry;
pub mod world;

pub use area::Area;
pub use location::{Actions, Location, Origin, Transition};
pub use registry::{Collision, GraphRegistry, RegistryState};
pub use world::World;
