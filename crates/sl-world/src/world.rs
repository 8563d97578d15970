//! World arena and the read-only view handed to agents.
//!
//! # Data layout
//!
//! Interactables live in a single `Vec` indexed by [`ObjectId`].  A sorted
//! `kind → Vec<ObjectId>` index preserves insertion order inside each group,
//! which is the order nearest-object ties are broken in.

use std::collections::BTreeMap;

use sl_core::{ObjectId, Vec2};

use crate::{Interactable, ObjectKind, WorldError, WorldResult, nearest};

// ── World ─────────────────────────────────────────────────────────────────────

/// All interactables in the simulation.  Built once at setup via
/// [`WorldBuilder`] and never mutated afterwards.
#[derive(Debug, Default)]
pub struct World {
    objects: Vec<Interactable>,
    by_kind: BTreeMap<ObjectKind, Vec<ObjectId>>,
}

impl World {
    /// A world with no objects.  Agents in it never leave `Idle` on their own.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Borrow a read-only view for one tick (or many).
    #[inline]
    pub fn view(&self) -> WorldView<'_> {
        WorldView { world: self }
    }

    pub fn get(&self, id: ObjectId) -> Option<&Interactable> {
        self.objects.get(id.index())
    }

    /// Every object with its id, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Interactable)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| ObjectId::from_index(i).map(|id| (id, o)))
    }
}

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Immutable, cheaply copyable handle to the world for agent updates.
///
/// Agents look objects up by kind or id and call
/// [`Interactable::use_on`]; there is no way to add, remove, or move an
/// object through a view.
#[derive(Copy, Clone, Debug)]
pub struct WorldView<'a> {
    world: &'a World,
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&'a Interactable> {
        self.world.get(id)
    }

    /// Ids of every object of `kind`, in insertion order.
    pub fn ids_of(&self, kind: ObjectKind) -> &'a [ObjectId] {
        self.world
            .by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Objects of `kind` with their ids, in insertion order.
    pub fn of_kind(self, kind: ObjectKind) -> impl Iterator<Item = (ObjectId, &'a Interactable)> + 'a {
        let objects = &self.world.objects;
        self.ids_of(kind)
            .iter()
            .map(move |&id| (id, &objects[id.index()]))
    }

    /// `true` if at least one object of `kind` exists.
    #[inline]
    pub fn has(&self, kind: ObjectKind) -> bool {
        !self.ids_of(kind).is_empty()
    }

    /// Kinds present in the view with their group sizes.
    pub fn kinds(self) -> impl Iterator<Item = (ObjectKind, usize)> + 'a {
        self.world.by_kind.iter().map(|(k, v)| (*k, v.len()))
    }

    /// Nearest object of `kind` to `from` (center to center).
    pub fn nearest(&self, kind: ObjectKind, from: Vec2) -> Option<ObjectId> {
        nearest(self.of_kind(kind), from)
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`World`].  Validates geometry on [`build`](Self::build).
#[derive(Default)]
pub struct WorldBuilder {
    objects: Vec<Interactable>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; returns the id it will have in the built world.
    ///
    /// Ids are capped at `u32::MAX`; [`build`](Self::build) rejects a
    /// builder holding more objects than that.
    pub fn add(&mut self, object: Interactable) -> ObjectId {
        let id = ObjectId(u32::try_from(self.objects.len()).unwrap_or(u32::MAX));
        self.objects.push(object);
        id
    }

    pub fn add_food(&mut self, x: f64, y: f64) -> ObjectId {
        self.add(Interactable::food(x, y))
    }

    pub fn add_bed(&mut self, x: f64, y: f64) -> ObjectId {
        self.add(Interactable::bed(x, y))
    }

    /// Chaining form of [`add`](Self::add).
    pub fn with(mut self, object: Interactable) -> Self {
        self.add(object);
        self
    }

    /// Validate every object and build the kind index.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidPosition`] for non-finite coordinates and
    /// [`WorldError::InvalidFootprint`] for non-positive sizes.  `index` in
    /// the error is the position within the object's own kind group.
    /// [`WorldError::TooManyObjects`] when ids would overflow `u32`.
    pub fn build(self) -> WorldResult<World> {
        let mut by_kind: BTreeMap<ObjectKind, Vec<ObjectId>> = BTreeMap::new();

        for (i, object) in self.objects.iter().enumerate() {
            let kind = object.kind();
            let group = by_kind.entry(kind).or_default();
            let index = group.len();

            if !object.position().is_finite() {
                return Err(WorldError::InvalidPosition { kind, index });
            }
            let fp = object.footprint();
            if !fp.is_valid() {
                return Err(WorldError::InvalidFootprint {
                    kind,
                    index,
                    width:  fp.width,
                    height: fp.height,
                });
            }
            let id = ObjectId::from_index(i)
                .ok_or(WorldError::TooManyObjects { count: self.objects.len() })?;
            group.push(id);
        }

        tracing::debug!(
            objects = self.objects.len(),
            groups = by_kind.len(),
            "world built"
        );

        Ok(World { objects: self.objects, by_kind })
    }
}
