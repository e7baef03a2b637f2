//! Minimal entity world carrying navigation data
//!
//! The engine never reaches into gameplay state directly: it scans this
//! registry for an entity holding a [`NavigationGrid`] and borrows it
//! read-only. Grid data is owned here, behind an `Arc`, so queries can
//! hold a reference without copying the cell set.

use std::sync::Arc;

use ahash::AHashMap;

use crate::core::error::{NavError, Result};
use crate::core::types::{EntityId, Tick};
use crate::nav::grid::NavigationGrid;

/// An entity in the world
///
/// Navigation data is optional - most entities are units, props, or
/// markers with none.
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub nav_grid: Option<Arc<NavigationGrid>>,
}

/// The world containing all entities
pub struct World {
    pub current_tick: Tick,
    entities: AHashMap<EntityId, Entity>,
    spawn_order: Vec<EntityId>,
}

impl World {
    pub fn new() -> Self {
        Self {
            current_tick: 0,
            entities: AHashMap::new(),
            spawn_order: Vec::new(),
        }
    }

    /// Spawn a plain entity
    pub fn spawn(&mut self, name: impl Into<String>) -> EntityId {
        self.spawn_entity(name.into(), None)
    }

    /// Spawn an entity carrying navigation-grid data
    pub fn spawn_with_grid(&mut self, name: impl Into<String>, grid: NavigationGrid) -> EntityId {
        self.spawn_entity(name.into(), Some(Arc::new(grid)))
    }

    fn spawn_entity(&mut self, name: String, nav_grid: Option<Arc<NavigationGrid>>) -> EntityId {
        let id = EntityId::new();
        self.entities.insert(
            id,
            Entity {
                id,
                name,
                nav_grid,
            },
        );
        self.spawn_order.push(id);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Navigation grid of a specific entity
    pub fn nav_grid_of(&self, id: EntityId) -> Result<Arc<NavigationGrid>> {
        let entity = self.entities.get(&id).ok_or(NavError::EntityNotFound(id))?;
        entity
            .nav_grid
            .clone()
            .ok_or(NavError::MissingNavData(id))
    }

    /// First entity carrying navigation data, in spawn order
    ///
    /// Spawn order keeps discovery deterministic when several grids exist.
    pub fn find_nav_grid(&self) -> Option<Arc<NavigationGrid>> {
        self.spawn_order
            .iter()
            .filter_map(|id| self.entities.get(id))
            .find_map(|entity| entity.nav_grid.clone())
    }

    /// Advance the world clock one tick
    pub fn tick(&mut self) {
        self.current_tick += 1;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
