//! A* pathfinding over the navigation grid
//!
//! 4-directional expansion with a Manhattan heuristic (admissible and
//! consistent for axis-aligned movement). Per-cell cost multipliers are
//! charged when a cell is entered.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

use crate::core::types::GridPos;
use crate::nav::grid::NavGrid;

/// Result of a bounded search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Full path from start to goal, inclusive, in traversal order
    Found(Vec<GridPos>),
    /// Start or goal unwalkable, or the open set emptied without reaching
    /// the goal
    Unreachable,
    /// The expansion budget ran out before the search concluded
    Aborted,
}

impl SearchOutcome {
    /// Collapse to the classic optional-path form, dropping the
    /// aborted/unreachable distinction.
    pub fn into_path(self) -> Option<Vec<GridPos>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable | SearchOutcome::Aborted => None,
        }
    }
}

/// Entry in the A* open heap
///
/// Node identity is the coordinate alone; the authoritative per-coordinate
/// state (best g, parent) lives in coordinate-keyed maps. A cheaper
/// rediscovery of a coordinate pushes a fresh entry and the stale one is
/// skipped via the closed set when popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: OrderedFloat<f64>,
    g: OrderedFloat<f64>,
    seq: u64,
    cell: GridPos,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap: lowest f first, then lowest g, then
        // earliest insertion. The secondary keys make repeated queries on
        // identical input reproducible.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path using A*
///
/// Returns the path from `start` to `goal` inclusive, or None if either
/// endpoint is unwalkable or no walkable route connects them. Runs
/// unbounded; see [`find_path_bounded`] for the budgeted variant.
pub fn find_path(grid: &impl NavGrid, start: GridPos, goal: GridPos) -> Option<Vec<GridPos>> {
    find_path_bounded(grid, start, goal, None).into_path()
}

/// Find the cheapest path with an optional node-expansion budget
///
/// `max_expansions` of None runs to completion. With a budget, exhausting
/// it yields [`SearchOutcome::Aborted`] so callers can distinguish "gave
/// up" from "provably unreachable".
pub fn find_path_bounded(
    grid: &impl NavGrid,
    start: GridPos,
    goal: GridPos,
    max_expansions: Option<usize>,
) -> SearchOutcome {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return SearchOutcome::Unreachable;
    }
    if start == goal {
        return SearchOutcome::Found(vec![start]);
    }

    let mut open = BinaryHeap::new();
    let mut came_from: AHashMap<GridPos, GridPos> = AHashMap::new();
    let mut g_scores: AHashMap<GridPos, f64> = AHashMap::new();
    let mut closed: AHashSet<GridPos> = AHashSet::new();
    let mut seq: u64 = 0;
    let mut expanded: usize = 0;

    g_scores.insert(start, 0.0);
    open.push(OpenEntry {
        f: OrderedFloat(start.manhattan_distance(&goal) as f64),
        g: OrderedFloat(0.0),
        seq,
        cell: start,
    });

    while let Some(current) = open.pop() {
        if current.cell == goal {
            return SearchOutcome::Found(reconstruct_path(&came_from, current.cell));
        }

        // Stale heap entry for an already-finalized coordinate
        if !closed.insert(current.cell) {
            continue;
        }

        if let Some(limit) = max_expansions {
            if expanded >= limit {
                tracing::debug!(
                    "search aborted after {} expansions ({},{}) -> ({},{})",
                    expanded,
                    start.x,
                    start.y,
                    goal.x,
                    goal.y
                );
                return SearchOutcome::Aborted;
            }
        }
        expanded += 1;

        let current_g = g_scores.get(&current.cell).copied().unwrap_or(f64::INFINITY);

        for neighbor in current.cell.neighbors4() {
            if !grid.is_walkable(neighbor) || closed.contains(&neighbor) {
                continue;
            }

            let tentative_g = current_g + grid.cost(neighbor);
            let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.cell);
                g_scores.insert(neighbor, tentative_g);

                seq += 1;
                open.push(OpenEntry {
                    f: OrderedFloat(tentative_g + neighbor.manhattan_distance(&goal) as f64),
                    g: OrderedFloat(tentative_g),
                    seq,
                    cell: neighbor,
                });
            }
        }
    }

    SearchOutcome::Unreachable
}

/// Reconstruct path from the came_from map
fn reconstruct_path(came_from: &AHashMap<GridPos, GridPos>, mut current: GridPos) -> Vec<GridPos> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Total entering-cost of a path, counting every cell including the start
///
/// A uniform-cost 3-cell path costs 3.0. An empty path costs 0.0.
pub fn path_cost(grid: &impl NavGrid, path: &[GridPos]) -> f64 {
    path.iter().map(|cell| grid.cost(*cell)).sum()
}
