//! Flat-integer encoding and decoding for [`VoxGrid`].
//!
//! ## Layout
//!
//! | Offset | Count | Field |
//! |--------|-------|-------|
//! | 0 | 3 | Grid extents `x, y, z` |
//! | 3 | `x*y*z` | Cell values in X-fastest linearization order |
//!
//! Colors do not round-trip through this format: decoding synthesizes a
//! palette of slot 0 transparent plus one white entry per distinct non-zero
//! cell value. The consumer assigns real colors after decode.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::color::Color;
use crate::grid::{GridSize, VoxGrid};

/// Errors that can occur while decoding a flat payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is shorter than the three-value size header.
    #[error("payload too short for size header: {0} values")]
    MissingHeader(usize),
    /// The cell payload does not match the volume announced by the header.
    #[error("cell payload length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Cell count implied by the size header.
        expected: usize,
        /// Cell count actually present.
        actual: usize,
    },
}

impl VoxGrid {
    /// Decodes a grid from a flat `[x, y, z, c0, c1, …]` payload.
    ///
    /// The palette is synthesized from the data: its length is inferred,
    /// its colors are not. Cell values are kept verbatim, so a payload may
    /// produce cells above the synthesized palette length; those read as
    /// the error color until the consumer installs a real palette.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingHeader`] if fewer than three values
    /// are present, or [`DecodeError::LengthMismatch`] if the cell count
    /// does not equal `x*y*z`.
    pub fn from_flat(ints: &[u32]) -> Result<Self, DecodeError> {
        if ints.len() < 3 {
            return Err(DecodeError::MissingHeader(ints.len()));
        }
        let size = GridSize::new(ints[0], ints[1], ints[2]);
        let cells = &ints[3..];
        if cells.len() != size.volume() {
            return Err(DecodeError::LengthMismatch {
                expected: size.volume(),
                actual: cells.len(),
            });
        }

        let distinct: FxHashSet<u32> = cells.iter().copied().filter(|&c| c != 0).collect();
        let mut palette = Vec::with_capacity(1 + distinct.len());
        palette.push(Color::TRANSPARENT);
        palette.resize(1 + distinct.len(), Color::WHITE);

        Ok(VoxGrid::new(size, cells.to_vec(), palette))
    }

    /// Encodes this grid as a flat `[x, y, z, c0, c1, …]` payload.
    ///
    /// The inverse of [`VoxGrid::from_flat`] for size and cells; palette
    /// colors are not carried.
    pub fn to_flat(&self) -> Vec<u32> {
        let size = self.size();
        let mut out = Vec::with_capacity(3 + self.volume());
        out.extend([size.x, size.y, size.z]);
        out.extend_from_slice(self.cells());
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_cell_payload() {
        let grid = VoxGrid::from_flat(&[2, 1, 1, 0, 3]).unwrap();
        assert_eq!(grid.size(), GridSize::new(2, 1, 1));
        // One distinct non-zero value, so transparent + one white entry.
        assert_eq!(grid.palette(), &[Color::TRANSPARENT, Color::WHITE]);

        let voxels: Vec<_> = grid.voxels().map(|v| (v.x, v.y, v.z, v.value)).collect();
        assert_eq!(voxels, vec![(0, 0, 0, 0), (1, 0, 0, 3)]);

        // The stored value survives even though it exceeds the palette
        // length; reading its color yields the sentinel.
        assert_eq!(grid.get(1, 0, 0), 3);
        assert_eq!(grid.color(3), Color::ERROR);
    }

    #[test]
    fn test_decode_counts_distinct_nonzero_values() {
        let grid = VoxGrid::from_flat(&[2, 2, 1, 5, 5, 9, 0]).unwrap();
        // Distinct non-zero values {5, 9} → palette of 3.
        assert_eq!(grid.palette_len(), 3);
    }

    #[test]
    fn test_decode_starter_payload_matches_default() {
        let grid = VoxGrid::from_flat(&[1, 1, 1, 1]).unwrap();
        assert_eq!(grid, VoxGrid::default());
    }

    #[test]
    fn test_decode_all_empty_payload() {
        let grid = VoxGrid::from_flat(&[2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(grid.palette_len(), 1);
        assert_eq!(grid.occupied_voxels().count(), 0);
    }

    #[test]
    fn test_decode_short_header_errors() {
        assert!(matches!(
            VoxGrid::from_flat(&[]),
            Err(DecodeError::MissingHeader(0))
        ));
        assert!(matches!(
            VoxGrid::from_flat(&[2, 1]),
            Err(DecodeError::MissingHeader(2))
        ));
    }

    #[test]
    fn test_decode_length_mismatch_errors() {
        let result = VoxGrid::from_flat(&[2, 2, 2, 0, 0]);
        assert!(matches!(
            result,
            Err(DecodeError::LengthMismatch {
                expected: 8,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut grid = VoxGrid::default();
        grid.set_size(GridSize::new(3, 2, 2));
        grid.append_color(Color::rgb(1.0, 0.0, 0.0));
        grid.set(0, 0, 0, 1);
        grid.set(2, 1, 1, 2);

        let flat = grid.to_flat();
        assert_eq!(&flat[..3], &[3, 2, 2]);

        let back = VoxGrid::from_flat(&flat).unwrap();
        assert_eq!(back.size(), grid.size());
        assert_eq!(back.cells(), grid.cells());
        // Palette length is inferred from the two distinct non-zero values.
        assert_eq!(back.palette_len(), 3);
    }

    #[test]
    fn test_encode_header_only_for_zero_size() {
        let grid = VoxGrid::from_flat(&[0, 0, 0]).unwrap();
        assert!(grid.is_zero_size());
        assert_eq!(grid.to_flat(), vec![0, 0, 0]);
        assert_eq!(grid.voxels().count(), 0);
    }
}
