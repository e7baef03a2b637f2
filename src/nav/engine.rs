//! Pathfinding engine facade with cached-grid lifecycle
//!
//! Gameplay and AI code query through this facade. The grid comes from one
//! of two places: a one-shot lazy capture driven by the frame tick (legacy
//! behavior - the first grid found is kept and never refreshed), or an
//! explicit [`PathfindingEngine::rebind`] for levels whose navigation data
//! regenerates at runtime. Every query also accepts a per-call override.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::core::config::{config, NavConfig};
use crate::core::error::{NavError, Result};
use crate::core::types::GridPos;
use crate::nav::grid::NavigationGrid;
use crate::nav::los;
use crate::nav::pathfinding::{self, SearchOutcome};
use crate::nav::range;
use crate::world::World;

/// Tactical pathfinding engine
///
/// Holds at most one cached grid reference; never mutates grid data. All
/// query methods are synchronous and side-effect free.
pub struct PathfindingEngine {
    config: NavConfig,
    grid: Option<Arc<NavigationGrid>>,
}

impl PathfindingEngine {
    /// Create an engine using the global config
    pub fn new() -> Self {
        Self {
            config: config().clone(),
            grid: None,
        }
    }

    /// Create an engine with an explicit, validated config
    pub fn with_config(config: NavConfig) -> Result<Self> {
        config.validate().map_err(NavError::InvalidConfig)?;
        Ok(Self { config, grid: None })
    }

    /// Frame-tick hook: lazily capture a grid from the world
    ///
    /// Scans the world for an entity carrying navigation data and caches
    /// the first one found. Once a grid is captured this becomes a no-op;
    /// the cache is never refreshed from ticks. Use [`rebind`] when the
    /// level's navigation data regenerates.
    ///
    /// [`rebind`]: PathfindingEngine::rebind
    pub fn on_tick(&mut self, world: &World) {
        if self.grid.is_some() {
            return;
        }
        if let Some(grid) = world.find_nav_grid() {
            tracing::debug!(
                "captured navigation grid ({} cells) on tick {}",
                grid.len(),
                world.current_tick
            );
            self.grid = Some(grid);
        }
    }

    /// Replace the cached grid explicitly
    pub fn rebind(&mut self, grid: Arc<NavigationGrid>) {
        tracing::debug!("rebound navigation grid ({} cells)", grid.len());
        self.grid = Some(grid);
    }

    /// The currently cached grid, if any
    pub fn grid(&self) -> Option<&NavigationGrid> {
        self.grid.as_deref()
    }

    /// Per-call override beats the cache
    fn resolve<'a>(&'a self, overlay: Option<&'a NavigationGrid>) -> Option<&'a NavigationGrid> {
        overlay.or(self.grid.as_deref())
    }

    /// A* path from start to goal, inclusive
    ///
    /// None when no grid is available, an endpoint is unwalkable, or no
    /// walkable route connects the endpoints. A configured expansion
    /// budget that runs out also yields None here; use
    /// [`find_path_outcome`] to observe the abort distinctly.
    ///
    /// [`find_path_outcome`]: PathfindingEngine::find_path_outcome
    pub fn find_path(
        &self,
        start: GridPos,
        goal: GridPos,
        grid: Option<&NavigationGrid>,
    ) -> Option<Vec<GridPos>> {
        match self.find_path_outcome(start, goal, grid)? {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
            SearchOutcome::Aborted => {
                tracing::warn!(
                    "pathfinding aborted by expansion budget ({},{}) -> ({},{})",
                    start.x,
                    start.y,
                    goal.x,
                    goal.y
                );
                None
            }
        }
    }

    /// A* search reporting the full outcome (found / unreachable / aborted)
    ///
    /// None only when no grid is available.
    pub fn find_path_outcome(
        &self,
        start: GridPos,
        goal: GridPos,
        grid: Option<&NavigationGrid>,
    ) -> Option<SearchOutcome> {
        let grid = self.resolve(grid)?;
        Some(pathfinding::find_path_bounded(
            grid,
            start,
            goal,
            self.config.max_expansions,
        ))
    }

    /// Total entering-cost of a path, every cell counted
    ///
    /// 0.0 when no grid is available or the path is empty.
    pub fn path_cost(&self, path: &[GridPos], grid: Option<&NavigationGrid>) -> f64 {
        match self.resolve(grid) {
            Some(grid) => pathfinding::path_cost(grid, path),
            None => 0.0,
        }
    }

    /// Straight-segment visibility between two cells
    ///
    /// False when no grid is available.
    pub fn line_of_sight(
        &self,
        from: GridPos,
        to: GridPos,
        grid: Option<&NavigationGrid>,
    ) -> bool {
        match self.resolve(grid) {
            Some(grid) => los::line_of_sight(grid, from, to),
            None => false,
        }
    }

    /// String-pull a raw path into a minimal waypoint list
    ///
    /// Without a grid there is nothing to test LOS against, so the path
    /// comes back unchanged.
    pub fn smooth_path(&self, path: &[GridPos], grid: Option<&NavigationGrid>) -> Vec<GridPos> {
        match self.resolve(grid) {
            Some(grid) => los::smooth_path(grid, path),
            None => path.to_vec(),
        }
    }

    /// Cells reachable within a movement-point budget
    ///
    /// Empty when no grid is available.
    pub fn movement_range(
        &self,
        start: GridPos,
        movement_points: f64,
        grid: Option<&NavigationGrid>,
    ) -> AHashSet<GridPos> {
        match self.resolve(grid) {
            Some(grid) => range::movement_range(grid, start, movement_points),
            None => AHashSet::new(),
        }
    }

    /// Reachable cells with their minimal cumulative costs
    pub fn movement_range_costs(
        &self,
        start: GridPos,
        movement_points: f64,
        grid: Option<&NavigationGrid>,
    ) -> AHashMap<GridPos, f64> {
        match self.resolve(grid) {
            Some(grid) => range::movement_range_costs(grid, start, movement_points),
            None => AHashMap::new(),
        }
    }
}

impl Default for PathfindingEngine {
    fn default() -> Self {
        Self::new()
    }
}
