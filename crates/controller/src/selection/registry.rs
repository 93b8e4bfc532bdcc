use ahash::AHashSet;
use bevy::prelude::*;

/// The set of currently selected entities.
///
/// The registry mirrors the presence of the [`super::Selected`] marker
/// component and is kept in sync by the selection bookkeeping. It exists so
/// that UI code can cheaply inspect the selection without querying entity
/// components.
#[derive(Resource, Default)]
pub struct SelectionRegistry {
    selected: AHashSet<Entity>,
}

impl SelectionRegistry {
    /// Adds an entity to the registry. Returns false if the entity was
    /// already registered.
    pub(crate) fn insert(&mut self, entity: Entity) -> bool {
        self.selected.insert(entity)
    }

    /// Removes an entity from the registry. Returns false if the entity was
    /// not registered.
    pub(crate) fn remove(&mut self, entity: Entity) -> bool {
        self.selected.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.selected.contains(&entity)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.selected.iter().copied()
    }
}

/// Sent whenever an entity got selected or deselected, so that observers
/// (e.g. HUD panels) can update themselves.
#[derive(Event)]
pub struct SelectionChangedEvent {
    entity: Entity,
    selected: bool,
}

impl SelectionChangedEvent {
    pub(crate) fn new(entity: Entity, selected: bool) -> Self {
        Self { entity, selected }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn selected(&self) -> bool {
        self.selected
    }
}
