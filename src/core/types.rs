//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Integer cell coordinate on the tactical grid
///
/// Unbounded in both axes (negative coordinates are valid). The grid has no
/// intrinsic rectangle: whether a cell is passable is decided purely by
/// navigation-grid membership, never by geometric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (|dx| + |dy|)
    pub fn manhattan_distance(&self, other: &Self) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// The 4 axis-aligned neighbor coordinates
    pub fn neighbors4(&self) -> [GridPos; 4] {
        [
            GridPos::new(self.x + 1, self.y),
            GridPos::new(self.x - 1, self.y),
            GridPos::new(self.x, self.y + 1),
            GridPos::new(self.x, self.y - 1),
        ]
    }

    /// Cells on the straight segment from self to other (inclusive)
    ///
    /// Bresenham stepping, so every returned cell is axis- or
    /// diagonal-adjacent to the previous one.
    pub fn line_to(&self, other: &Self) -> Vec<GridPos> {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        let sx = if self.x < other.x { 1 } else { -1 };
        let sy = if self.y < other.y { 1 } else { -1 };

        let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
        let mut err = dx - dy;
        let mut x = self.x;
        let mut y = self.y;

        loop {
            cells.push(GridPos::new(x, y));
            if x == other.x && y == other.y {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
        cells
    }
}
