//! Cost-bounded movement range
//!
//! Dijkstra-style frontier expansion from an origin. The cost charged for a
//! move is the entering cost of the destination cell, never the cost of the
//! cell being left - in particular the origin itself is free, whatever its
//! own multiplier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

use crate::core::types::GridPos;
use crate::nav::grid::NavGrid;

/// Frontier entry ordered by ascending cumulative cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    cost: OrderedFloat<f64>,
    seq: u64,
    cell: GridPos,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap, insertion order as deterministic tie-break
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cells reachable from `start` within `movement_points`
///
/// A cell is included iff the minimum cumulative entering-cost of any
/// walkable route from `start` to it fits the budget. A budget of 0 yields
/// `{start}` alone.
pub fn movement_range(
    grid: &impl NavGrid,
    start: GridPos,
    movement_points: f64,
) -> AHashSet<GridPos> {
    movement_range_costs(grid, start, movement_points)
        .keys()
        .copied()
        .collect()
}

/// Reachable cells with their minimal cumulative entering-costs
///
/// Same expansion as [`movement_range`], keeping the cost each cell was
/// reached at. The origin is always present at cost 0.
pub fn movement_range_costs(
    grid: &impl NavGrid,
    start: GridPos,
    movement_points: f64,
) -> AHashMap<GridPos, f64> {
    let mut best: AHashMap<GridPos, f64> = AHashMap::new();
    let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best.insert(start, 0.0);
    open.push(FrontierEntry {
        cost: OrderedFloat(0.0),
        seq,
        cell: start,
    });

    while let Some(current) = open.pop() {
        // Stale entry: the cell was reached cheaper since this was pushed
        let known = best.get(&current.cell).copied().unwrap_or(f64::INFINITY);
        if current.cost.0 > known {
            continue;
        }

        for neighbor in current.cell.neighbors4() {
            if !grid.is_walkable(neighbor) {
                continue;
            }

            let tentative = current.cost.0 + grid.cost(neighbor);
            if tentative > movement_points {
                continue;
            }

            let known = best.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                best.insert(neighbor, tentative);
                seq += 1;
                open.push(FrontierEntry {
                    cost: OrderedFloat(tentative),
                    seq,
                    cell: neighbor,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::grid::NavigationGrid;

    #[test]
    fn test_zero_budget_start_only() {
        let grid = NavigationGrid::open(5, 5);
        let range = movement_range(&grid, GridPos::new(2, 2), 0.0);
        assert_eq!(range.len(), 1);
        assert!(range.contains(&GridPos::new(2, 2)));
    }

    #[test]
    fn test_start_free_despite_own_multiplier() {
        let mut grid = NavigationGrid::open(5, 5);
        grid.set_cost(GridPos::new(2, 2), 99.0);

        let range = movement_range(&grid, GridPos::new(2, 2), 1.0);
        // Start included at cost 0; all four neighbors within budget
        assert!(range.contains(&GridPos::new(2, 2)));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_uniform_budget_one() {
        let grid = NavigationGrid::open(5, 5);
        let range = movement_range(&grid, GridPos::new(2, 2), 1.0);
        // Start plus the 4 cardinal neighbors
        assert_eq!(range.len(), 5);
        assert!(range.contains(&GridPos::new(3, 2)));
        assert!(!range.contains(&GridPos::new(4, 2)));
    }

    #[test]
    fn test_saturates_open_grid() {
        let grid = NavigationGrid::open(6, 6);
        let range = movement_range(&grid, GridPos::new(0, 0), 12.0);
        assert_eq!(range.len(), grid.len());
    }

    #[test]
    fn test_expensive_detour_excluded() {
        // Corridor 0..=4 at y=0; every cell past x=1 costs 3.0. Budget 4
        // reaches x=2 (cost 1+3) but not x=3 (cost 7), even though its
        // Manhattan distance of 3 looks affordable.
        let mut grid = NavigationGrid::new();
        grid.add_rect(0, 0, 4, 0);
        for x in 2..=4 {
            grid.set_cost(GridPos::new(x, 0), 3.0);
        }

        let range = movement_range(&grid, GridPos::new(0, 0), 4.0);
        assert!(range.contains(&GridPos::new(2, 0)));
        assert!(!range.contains(&GridPos::new(3, 0)));
    }

    #[test]
    fn test_obstacle_forces_longer_route() {
        // U-shaped wall makes the cell behind it cost far more than its
        // straight-line distance suggests.
        let mut grid = NavigationGrid::open(7, 7);
        grid.remove_cell(GridPos::new(3, 2));
        grid.remove_cell(GridPos::new(3, 3));
        grid.remove_cell(GridPos::new(3, 4));

        let range = movement_range(&grid, GridPos::new(2, 3), 2.0);
        // (4,3) is Manhattan distance 2 away but walled off
        assert!(!range.contains(&GridPos::new(4, 3)));
    }

    #[test]
    fn test_range_costs_are_minimal() {
        let mut grid = NavigationGrid::open(4, 4);
        grid.set_cost(GridPos::new(1, 0), 10.0);

        let costs = movement_range_costs(&grid, GridPos::new(0, 0), 20.0);
        assert_eq!(costs[&GridPos::new(0, 0)], 0.0);
        // Entering (1,0) itself always costs 10, so the cheapest route is
        // the direct step; (1,1) is cheaper reached around it.
        assert_eq!(costs[&GridPos::new(1, 0)], 10.0);
        assert_eq!(costs[&GridPos::new(1, 1)], 2.0);
    }

    #[test]
    fn test_range_monotone_in_budget() {
        let mut grid = NavigationGrid::open(8, 8);
        grid.set_cost(GridPos::new(4, 4), 2.5);

        let small = movement_range(&grid, GridPos::new(1, 1), 3.0);
        let large = movement_range(&grid, GridPos::new(1, 1), 6.0);
        assert!(small.iter().all(|cell| large.contains(cell)));
    }
}
