//! Tactical navigation - A* search, line of sight, smoothing, movement range
//!
//! All algorithms run over a sparse navigation grid: a walkable-cell set
//! plus per-cell entering-cost multipliers. "No path", "unwalkable
//! endpoint" and "no grid" are expected outcomes and come back as absent
//! results, never as errors.

pub mod engine;
pub mod grid;
pub mod los;
pub mod pathfinding;
pub mod range;

// Re-exports for convenient access
pub use engine::PathfindingEngine;
pub use grid::{NavGrid, NavigationGrid};
pub use los::{line_of_sight, smooth_path};
pub use pathfinding::{find_path, find_path_bounded, path_cost, SearchOutcome};
pub use range::{movement_range, movement_range_costs};
