//! Palette-indexed dense voxel grids with flat-integer encoding and
//! isometric display metrics.

pub mod codec;
pub mod color;
pub mod grid;
pub mod projection;

pub use codec::DecodeError;
pub use color::Color;
pub use grid::{GridSize, VoxGrid, Voxel, Voxels};
