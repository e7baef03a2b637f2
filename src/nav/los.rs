//! Line of sight and path smoothing
//!
//! LOS discretizes the straight segment between two cells and demands that
//! every stepped-through cell, endpoints included, is walkable. Smoothing
//! uses LOS shortcuts to reduce a grid-aligned path to its waypoints.

use crate::core::types::GridPos;
use crate::nav::grid::NavGrid;

/// Is the straight segment between two cells fully walkable?
///
/// Both endpoints count. A degenerate query on a single walkable cell is
/// true.
pub fn line_of_sight(grid: &impl NavGrid, from: GridPos, to: GridPos) -> bool {
    from.line_to(&to).into_iter().all(|cell| grid.is_walkable(cell))
}

/// Reduce a raw grid path to a minimal waypoint list (string-pulling)
///
/// From each anchor, candidates are extended forward while LOS holds; the
/// last visible candidate becomes the next anchor. A straight corridor
/// collapses to `[start, end]`. Paths of length 1 or 2 come back unchanged.
pub fn smooth_path(grid: &impl NavGrid, path: &[GridPos]) -> Vec<GridPos> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut waypoints = vec![path[0]];
    let mut anchor = 0;

    while anchor < path.len() - 1 {
        let mut reach = anchor + 1;
        for candidate in (anchor + 2)..path.len() {
            if line_of_sight(grid, path[anchor], path[candidate]) {
                reach = candidate;
            } else {
                break;
            }
        }
        waypoints.push(path[reach]);
        anchor = reach;
    }

    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::grid::NavigationGrid;
    use crate::nav::pathfinding::find_path;

    #[test]
    fn test_los_open_run() {
        let grid = NavigationGrid::open(10, 10);
        assert!(line_of_sight(&grid, GridPos::new(0, 0), GridPos::new(9, 0)));
        assert!(line_of_sight(&grid, GridPos::new(0, 0), GridPos::new(9, 9)));
    }

    #[test]
    fn test_los_blocked_by_obstacle() {
        let mut grid = NavigationGrid::open(10, 10);
        grid.remove_cell(GridPos::new(4, 0));
        assert!(!line_of_sight(&grid, GridPos::new(0, 0), GridPos::new(9, 0)));
    }

    #[test]
    fn test_los_unwalkable_endpoint() {
        let mut grid = NavigationGrid::open(10, 10);
        grid.remove_cell(GridPos::new(9, 0));
        assert!(!line_of_sight(&grid, GridPos::new(0, 0), GridPos::new(9, 0)));
    }

    #[test]
    fn test_los_degenerate_same_cell() {
        let grid = NavigationGrid::open(3, 3);
        assert!(line_of_sight(&grid, GridPos::new(1, 1), GridPos::new(1, 1)));
        assert!(!line_of_sight(&grid, GridPos::new(5, 5), GridPos::new(5, 5)));
    }

    #[test]
    fn test_smooth_straight_corridor() {
        let grid = NavigationGrid::open(10, 1);
        let path: Vec<GridPos> = (0..10).map(|x| GridPos::new(x, 0)).collect();

        let smoothed = smooth_path(&grid, &path);
        assert_eq!(smoothed, vec![GridPos::new(0, 0), GridPos::new(9, 0)]);
    }

    #[test]
    fn test_smooth_short_paths_unchanged() {
        let grid = NavigationGrid::open(5, 5);

        let one = vec![GridPos::new(0, 0)];
        assert_eq!(smooth_path(&grid, &one), one);

        let two = vec![GridPos::new(0, 0), GridPos::new(1, 0)];
        assert_eq!(smooth_path(&grid, &two), two);
    }

    #[test]
    fn test_smooth_keeps_bend_around_obstacle() {
        let mut grid = NavigationGrid::open(8, 8);
        // Wall forcing the path to bend, with a gap at y=4
        for y in 0..4 {
            grid.remove_cell(GridPos::new(4, y));
        }

        let raw = find_path(&grid, GridPos::new(0, 0), GridPos::new(7, 0)).unwrap();
        let smoothed = smooth_path(&grid, &raw);

        assert_eq!(smoothed.first(), Some(&GridPos::new(0, 0)));
        assert_eq!(smoothed.last(), Some(&GridPos::new(7, 0)));
        // Fewer waypoints than raw cells, but more than a straight shot
        assert!(smoothed.len() < raw.len());
        assert!(smoothed.len() > 2);
        // Consecutive waypoints are mutually visible
        for pair in smoothed.windows(2) {
            assert!(line_of_sight(&grid, pair[0], pair[1]));
        }
    }
}
