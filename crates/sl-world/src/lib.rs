//! `sl-world` — the objects agents walk to and use.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`interactable`] | `Interactable` (`Food`/`Bed`), `ObjectKind`, `Effect`      |
//! | [`world`]        | `World` arena, `WorldBuilder`, read-only `WorldView`       |
//! | [`select`]       | Stable nearest-object scan                                 |
//! | [`error`]        | `WorldError`, `WorldResult<T>`                             |
//!
//! # Ownership
//!
//! The simulation loop owns the [`World`].  Agents receive a [`WorldView`]
//! each tick and keep only [`ObjectId`][sl_core::ObjectId]s, never
//! references, so abandoning a target can never leave a dangling owner.

pub mod error;
pub mod interactable;
pub mod select;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use interactable::{Bed, Effect, FoodSource, Interactable, ObjectKind};
pub use select::nearest;
pub use world::{World, WorldBuilder, WorldView};
