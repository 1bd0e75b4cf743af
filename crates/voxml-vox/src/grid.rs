//! Dense palette-indexed voxel grid with overlap-preserving resize.
//!
//! Cells hold palette indices in a flat array using X-fastest linearization
//! (`i = x + y*w + z*w*h`). Index 0 is the reserved "empty" value. The
//! palette is an ordered color list where slot 0 is conventionally
//! transparent; only the trailing entry can ever be removed, so cell values
//! above the palette length can only appear transiently and read as the
//! error color.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Grid dimensions in voxels.
///
/// `GridSize::ZERO` is the "uninitialized" sentinel: a grid of that size
/// holds no cells and enumerates nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Width (X extent).
    pub x: u32,
    /// Height (Y extent).
    pub y: u32,
    /// Depth (Z extent).
    pub z: u32,
}

impl GridSize {
    /// The zero-size sentinel.
    pub const ZERO: GridSize = GridSize::new(0, 0, 0);

    /// A single-cell grid.
    pub const ONE: GridSize = GridSize::new(1, 1, 1);

    /// Creates a size from explicit extents.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells (`x * y * z`).
    pub fn volume(self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Returns `true` if this is the zero-size sentinel.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Euclidean length of the size vector, used for depth shading.
    pub fn magnitude(self) -> f32 {
        self.as_vec3().length()
    }

    /// Converts to a float vector.
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Checks whether `(x, y, z)` lies inside `[0, extent)` on every axis.
    fn contains(self, x: u32, y: u32, z: u32) -> bool {
        x < self.x && y < self.y && z < self.z
    }
}

// ---------------------------------------------------------------------------
// Voxel
// ---------------------------------------------------------------------------

/// One enumerated cell: its coordinates plus the raw stored palette index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// X coordinate.
    pub x: u32,
    /// Y coordinate.
    pub y: u32,
    /// Z coordinate.
    pub z: u32,
    /// Raw palette index (0 = empty).
    pub value: u32,
}

// ---------------------------------------------------------------------------
// VoxGrid
// ---------------------------------------------------------------------------

/// Dense 3D grid of palette indices with an ordered color palette.
///
/// Invariant: `cells.len() == size.volume()` at all times. Every mutation
/// is fail-silent on bad input (see the individual methods); the only
/// panicking operations are the direct-index ones documented as such.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxGrid {
    size: GridSize,
    cells: Vec<u32>,
    palette: Vec<Color>,
}

impl VoxGrid {
    /// Creates a grid from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != size.volume()` — the caller guarantees the
    /// length contract, and a mismatch is a programming error.
    pub fn new(size: GridSize, cells: Vec<u32>, palette: Vec<Color>) -> Self {
        assert_eq!(
            cells.len(),
            size.volume(),
            "cell array length must equal grid volume"
        );
        Self {
            size,
            cells,
            palette,
        }
    }

    /// The grid dimensions.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if this grid has the zero-size sentinel dimensions.
    pub fn is_zero_size(&self) -> bool {
        self.size.is_zero()
    }

    /// The raw cell array in storage order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns the raw stored value at `(x, y, z)`.
    ///
    /// Returns 0 (empty) if any coordinate is out of bounds. Values above
    /// the palette length are returned as stored; [`VoxGrid::color`] maps
    /// them to the error sentinel.
    pub fn get(&self, x: u32, y: u32, z: u32) -> u32 {
        if !self.size.contains(x, y, z) {
            tracing::warn!("VoxGrid::get out of bounds: ({}, {}, {})", x, y, z);
            return 0;
        }
        self.cells[self.linear_index(x, y, z)]
    }

    /// Writes a palette index at `(x, y, z)`.
    ///
    /// No-op with a warning log if `value` is not a valid palette index or
    /// any coordinate is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: u32) {
        if value as usize >= self.palette.len() || !self.size.contains(x, y, z) {
            tracing::warn!(
                "VoxGrid::set rejected: ({}, {}, {}) value {}",
                x,
                y,
                z,
                value
            );
            return;
        }
        let index = self.linear_index(x, y, z);
        self.cells[index] = value;
    }

    /// Resizes the grid, preserving the overlapping sub-box.
    ///
    /// No-op with a warning log if any dimension is zero. Cells inside
    /// `[0, min(old, new))` on every axis are copied over; everything else
    /// starts empty. The palette is untouched.
    pub fn set_size(&mut self, new_size: GridSize) {
        if new_size.x == 0 || new_size.y == 0 || new_size.z == 0 {
            tracing::warn!(
                "VoxGrid::set_size rejected zero dimension: ({}, {}, {})",
                new_size.x,
                new_size.y,
                new_size.z
            );
            return;
        }

        let mut cells = vec![0u32; new_size.volume()];
        let sx = self.size.x.min(new_size.x) as usize;
        let sy = self.size.y.min(new_size.y) as usize;
        let sz = self.size.z.min(new_size.z) as usize;

        let old_w = self.size.x as usize;
        let old_plane = old_w * self.size.y as usize;
        let new_w = new_size.x as usize;
        let new_plane = new_w * new_size.y as usize;

        for z in 0..sz {
            for y in 0..sy {
                let src = z * old_plane + y * old_w;
                let dst = z * new_plane + y * new_w;
                cells[dst..dst + sx].copy_from_slice(&self.cells[src..src + sx]);
            }
        }

        self.cells = cells;
        self.size = new_size;
    }

    /// Lazy iterator over every cell in storage order (Z outer, Y middle,
    /// X inner — matching the linearization).
    pub fn voxels(&self) -> Voxels<'_> {
        Voxels {
            grid: self,
            index: 0,
            skip_empty: false,
        }
    }

    /// Like [`VoxGrid::voxels`], but omits cells whose value is 0.
    pub fn occupied_voxels(&self) -> Voxels<'_> {
        Voxels {
            grid: self,
            index: 0,
            skip_empty: true,
        }
    }

    // -- palette ------------------------------------------------------------

    /// The ordered color palette.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Number of palette entries, including the transparent slot 0.
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Replaces the whole palette.
    pub fn set_palette(&mut self, palette: Vec<Color>) {
        self.palette = palette;
    }

    /// Returns the color at `index`, or [`Color::ERROR`] when out of range.
    ///
    /// Never faults: stale cell values left behind by palette truncation
    /// read as the sentinel.
    pub fn color(&self, index: u32) -> Color {
        self.palette
            .get(index as usize)
            .copied()
            .unwrap_or(Color::ERROR)
    }

    /// Overwrites the palette slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range — slot indices are only produced
    /// by the palette itself, so a bad one is a programming error.
    pub fn set_color(&mut self, index: u32, color: Color) {
        self.palette[index as usize] = color;
    }

    /// Appends a color at the end of the palette.
    ///
    /// Existing indices are never reordered.
    pub fn append_color(&mut self, color: Color) {
        self.palette.push(color);
    }

    /// Removes the trailing palette entry and empties every cell that
    /// referenced it.
    ///
    /// No-op if only the transparent slot 0 remains. Only the exact removed
    /// tail index is compacted; since removal is tail-only, no other index
    /// can have been invalidated.
    pub fn remove_last_color(&mut self) {
        if self.palette.len() <= 1 {
            tracing::debug!("VoxGrid::remove_last_color ignored: palette already minimal");
            return;
        }
        self.palette.pop();
        let removed = self.palette.len() as u32;
        for cell in &mut self.cells {
            if *cell == removed {
                *cell = 0;
            }
        }
    }

    /// Converts `(x, y, z)` to the flat storage offset (X varies fastest).
    fn linear_index(&self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(self.size.contains(x, y, z));
        let w = self.size.x as usize;
        let h = self.size.y as usize;
        x as usize + y as usize * w + z as usize * w * h
    }
}

impl Default for VoxGrid {
    /// A 1×1×1 grid with its single cell painted white: slot 0 transparent,
    /// slot 1 white, cell value 1.
    fn default() -> Self {
        Self {
            size: GridSize::ONE,
            cells: vec![1],
            palette: vec![Color::TRANSPARENT, Color::WHITE],
        }
    }
}

// ---------------------------------------------------------------------------
// Voxels iterator
// ---------------------------------------------------------------------------

/// Lazy, restartable iterator over grid cells in storage order.
///
/// Created by [`VoxGrid::voxels`] and [`VoxGrid::occupied_voxels`]. The
/// grid is borrowed immutably, so enumeration never observes mutation.
#[derive(Clone)]
pub struct Voxels<'a> {
    grid: &'a VoxGrid,
    index: usize,
    skip_empty: bool,
}

impl Iterator for Voxels<'_> {
    type Item = Voxel;

    fn next(&mut self) -> Option<Voxel> {
        let w = self.grid.size.x as usize;
        let h = self.grid.size.y as usize;
        while self.index < self.grid.cells.len() {
            let i = self.index;
            self.index += 1;
            let value = self.grid.cells[i];
            if self.skip_empty && value == 0 {
                continue;
            }
            return Some(Voxel {
                x: (i % w) as u32,
                y: (i / w % h) as u32,
                z: (i / (w * h)) as u32,
                value,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.index;
        if self.skip_empty {
            (0, Some(remaining))
        } else {
            (remaining, Some(remaining))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
