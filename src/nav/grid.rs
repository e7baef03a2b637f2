//! Navigation grid: the sole source of passability and cost truth
//!
//! The grid is SPARSE - a cell is passable iff it is in the walkable set,
//! regardless of where it sits. There is no bounding rectangle.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::GridPos;

/// Read-only view of navigation data
///
/// Decouples the search algorithms from any particular storage or entity
/// container. All queries go through these two methods.
pub trait NavGrid {
    /// May a path occupy this cell?
    fn is_walkable(&self, cell: GridPos) -> bool;

    /// Cost multiplier for *entering* this cell. Must be > 0.
    fn cost(&self, cell: GridPos) -> f64;
}

/// Sparse in-memory navigation grid
///
/// Owned by the world/level system; the engine only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationGrid {
    walkable: AHashSet<GridPos>,
    costs: AHashMap<GridPos, f64>,
    default_cost: f64,
}

impl NavigationGrid {
    /// Create an empty grid using the configured default cell cost
    pub fn new() -> Self {
        Self::with_default_cost(config().default_cell_cost)
    }

    /// Create an empty grid with an explicit default cell cost
    pub fn with_default_cost(default_cost: f64) -> Self {
        Self {
            walkable: AHashSet::new(),
            costs: AHashMap::new(),
            default_cost,
        }
    }

    /// Create a fully open w x h grid anchored at the origin
    pub fn open(width: u32, height: u32) -> Self {
        let mut grid = Self::new();
        if width > 0 && height > 0 {
            grid.add_rect(0, 0, width as i32 - 1, height as i32 - 1);
        }
        grid
    }

    /// Mark a single cell walkable
    pub fn add_cell(&mut self, cell: GridPos) {
        self.walkable.insert(cell);
    }

    /// Mark every cell in the inclusive rectangle walkable
    pub fn add_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.walkable.insert(GridPos::new(x, y));
            }
        }
    }

    /// Remove a cell from the walkable set (its cost entry is kept)
    pub fn remove_cell(&mut self, cell: GridPos) {
        self.walkable.remove(&cell);
    }

    /// Set the entering-cost multiplier for a cell
    ///
    /// Multipliers should be strictly positive. A non-positive value is
    /// stored as given - searches do not defend against it - but the
    /// misuse is logged so it surfaces during development.
    pub fn set_cost(&mut self, cell: GridPos, cost: f64) {
        if cost <= 0.0 {
            tracing::warn!(
                "non-positive cost multiplier {} at ({}, {})",
                cost,
                cell.x,
                cell.y
            );
        }
        self.costs.insert(cell, cost);
    }

    /// Number of walkable cells
    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }

    /// Iterate over all walkable cells (unordered)
    pub fn walkable_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.walkable.iter().copied()
    }
}

impl Default for NavigationGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl NavGrid for NavigationGrid {
    fn is_walkable(&self, cell: GridPos) -> bool {
        self.walkable.contains(&cell)
    }

    fn cost(&self, cell: GridPos) -> f64 {
        self.costs.get(&cell).copied().unwrap_or(self.default_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_nothing_walkable() {
        let grid = NavigationGrid::new();
        assert!(grid.is_empty());
        assert!(!grid.is_walkable(GridPos::new(0, 0)));
    }

    #[test]
    fn test_membership_is_sole_passability_authority() {
        let mut grid = NavigationGrid::new();
        grid.add_cell(GridPos::new(-50, 1000));
        assert!(grid.is_walkable(GridPos::new(-50, 1000)));
        assert!(!grid.is_walkable(GridPos::new(-50, 1001)));
    }

    #[test]
    fn test_open_grid_dimensions() {
        let grid = NavigationGrid::open(5, 4);
        assert_eq!(grid.len(), 20);
        assert!(grid.is_walkable(GridPos::new(0, 0)));
        assert!(grid.is_walkable(GridPos::new(4, 3)));
        assert!(!grid.is_walkable(GridPos::new(5, 0)));
    }

    #[test]
    fn test_default_cost_for_unspecified_cells() {
        let mut grid = NavigationGrid::new();
        grid.add_cell(GridPos::new(1, 1));
        assert_eq!(grid.cost(GridPos::new(1, 1)), 1.0);
    }

    #[test]
    fn test_explicit_cost_multiplier() {
        let mut grid = NavigationGrid::open(3, 3);
        grid.set_cost(GridPos::new(1, 1), 2.5);
        assert_eq!(grid.cost(GridPos::new(1, 1)), 2.5);
        assert_eq!(grid.cost(GridPos::new(0, 0)), 1.0);
    }

    #[test]
    fn test_remove_cell_keeps_cost_entry() {
        let mut grid = NavigationGrid::open(3, 3);
        grid.set_cost(GridPos::new(1, 1), 4.0);
        grid.remove_cell(GridPos::new(1, 1));
        assert!(!grid.is_walkable(GridPos::new(1, 1)));
        assert_eq!(grid.cost(GridPos::new(1, 1)), 4.0);
    }

}
