//! Isometric canvas metrics for voxel display.
//!
//! Pure functions of grid size and cell coordinates. The GUI layer uses
//! them to size the drawing area, place each cell tile, and order/shade
//! cells by depth; none of them touch grid state.

use glam::{Vec2, Vec3};

use crate::grid::GridSize;

/// On-canvas size of one voxel tile, in pixels.
pub const TILE_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Canvas step between adjacent cells: half a tile horizontally, a quarter
/// tile vertically.
pub const STEP: Vec2 = Vec2::new(16.0, 8.0);

/// Normalized (1, 1, 1) axis used as the depth-ordering direction.
pub const DEPTH_AXIS: Vec3 = Vec3::new(0.577_350_3, 0.577_350_3, 0.577_350_3);

/// Total canvas height needed to draw a grid of the given size.
pub fn canvas_height(size: GridSize) -> f32 {
    (size.y * 2 + size.x + size.z) as f32 * STEP.y
}

/// Total canvas width needed to draw a grid of the given size.
pub fn canvas_width(size: GridSize) -> f32 {
    (size.x + size.z) as f32 * STEP.x
}

/// Horizontal centering offset for a grid of the given size.
pub fn horizontal_offset(size: GridSize) -> f32 {
    (size.z as f32 - size.x as f32) * STEP.x / 2.0
}

/// Canvas-space offset of the cell at `(x, y, z)` relative to the grid
/// origin tile.
pub fn canvas_offset(x: u32, y: u32, z: u32) -> Vec2 {
    let (x, y, z) = (x as f32, y as f32, z as f32);
    Vec2::new(STEP.x * (x - z), STEP.y * (x - 2.0 * y + z))
}

/// Depth-ordering key for the cell at `(x, y, z)`.
///
/// Cells with a larger key sit closer to the viewer and are drawn later.
pub fn depth_key(x: u32, y: u32, z: u32) -> f32 {
    Vec3::new(x as f32, y as f32, z as f32).dot(DEPTH_AXIS)
}

/// Brightness factor in `[0.5, 1.0]` for depth shading the cell at
/// `(x, y, z)` inside a grid of the given size.
pub fn depth_factor(size: GridSize, x: u32, y: u32, z: u32) -> f32 {
    0.5 + depth_key(x, y, z) / size.magnitude() / 2.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
