//! Pieces module - Tetromino shape table
//!
//! Every kind has exactly four rotation states. Each state is a small
//! rectangular grid; only its occupied cells are stored, as `(col, row)`
//! offsets from the grid's top-left corner (the piece anchor).
//!
//! There are no wall kicks: rotation swaps the grid in place at the same anchor.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// One rotation state of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    /// Occupied cells, row-major within the grid
    pub cells: [MinoOffset; 4],
    /// Grid width in columns
    pub width: u8,
    /// Grid height in rows
    pub height: u8,
}

impl PieceShape {
    /// Whether the grid cell at `(col, row)` is occupied
    pub fn is_filled(&self, col: i8, row: i8) -> bool {
        self.cells.contains(&(col, row))
    }

    /// Render the grid as text rows, `X` filled and `.` empty
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as i8)
            .map(|row| {
                (0..self.width as i8)
                    .map(|col| if self.is_filled(col, row) { 'X' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

const fn shape(cells: [MinoOffset; 4], width: u8, height: u8) -> PieceShape {
    PieceShape {
        cells,
        width,
        height,
    }
}

const I_H: PieceShape = shape([(0, 0), (1, 0), (2, 0), (3, 0)], 4, 1);
const I_V: PieceShape = shape([(0, 0), (0, 1), (0, 2), (0, 3)], 1, 4);
const O: PieceShape = shape([(0, 0), (1, 0), (0, 1), (1, 1)], 2, 2);

// S and Z flip between two states.
const S_H: PieceShape = shape([(1, 0), (2, 0), (0, 1), (1, 1)], 3, 2);
const S_V: PieceShape = shape([(0, 0), (0, 1), (1, 1), (1, 2)], 2, 3);
const Z_H: PieceShape = shape([(0, 0), (1, 0), (1, 1), (2, 1)], 3, 2);
const Z_V: PieceShape = shape([(1, 0), (0, 1), (1, 1), (0, 2)], 2, 3);

/// Shape table indexed by `[PieceKind::index()][Rotation::index()]`
pub static SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [I_H, I_V, I_H, I_V],
    // O
    [O, O, O, O],
    // T
    [
        shape([(1, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
        shape([(0, 0), (0, 1), (1, 1), (0, 2)], 2, 3),
        shape([(0, 0), (1, 0), (2, 0), (1, 1)], 3, 2),
        shape([(1, 0), (0, 1), (1, 1), (1, 2)], 2, 3),
    ],
    // S
    [S_H, S_V, S_H, S_V],
    // Z
    [Z_H, Z_V, Z_H, Z_V],
    // J
    [
        shape([(0, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
        shape([(0, 0), (1, 0), (0, 1), (0, 2)], 2, 3),
        shape([(0, 0), (1, 0), (2, 0), (2, 1)], 3, 2),
        shape([(1, 0), (1, 1), (0, 2), (1, 2)], 2, 3),
    ],
    // L
    [
        shape([(2, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
        shape([(0, 0), (0, 1), (0, 2), (1, 2)], 2, 3),
        shape([(0, 0), (1, 0), (2, 0), (0, 1)], 3, 2),
        shape([(0, 0), (1, 0), (1, 1), (1, 2)], 2, 3),
    ],
];

/// Get the shape for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static PieceShape {
    &SHAPES[kind.index()][rotation.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(kind: PieceKind, rotation: Rotation) -> Vec<String> {
        get_shape(kind, rotation).to_rows()
    }

    #[test]
    fn test_every_shape_has_four_cells_inside_its_grid() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let s = get_shape(kind, Rotation::from_index(r));
                for &(c, row) in &s.cells {
                    assert!(c >= 0 && (c as u8) < s.width, "{kind:?} r{r}");
                    assert!(row >= 0 && (row as u8) < s.height, "{kind:?} r{r}");
                }
                let mut sorted = s.cells.to_vec();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), 4, "{kind:?} r{r} has duplicate cells");
            }
        }
    }

    #[test]
    fn test_o_states_are_identical() {
        let first = get_shape(PieceKind::O, Rotation::R0);
        for r in 1..4 {
            assert_eq!(get_shape(PieceKind::O, Rotation::from_index(r)), first);
        }
    }

    #[test]
    fn test_t_grids() {
        assert_eq!(rows(PieceKind::T, Rotation::R0), [".X.", "XXX"]);
        assert_eq!(rows(PieceKind::T, Rotation::R90), ["X.", "XX", "X."]);
        assert_eq!(rows(PieceKind::T, Rotation::R180), ["XXX", ".X."]);
        assert_eq!(rows(PieceKind::T, Rotation::R270), [".X", "XX", ".X"]);
    }

    #[test]
    fn test_j_and_l_grids() {
        assert_eq!(rows(PieceKind::J, Rotation::R0), ["X..", "XXX"]);
        assert_eq!(rows(PieceKind::J, Rotation::R90), ["XX", "X.", "X."]);
        assert_eq!(rows(PieceKind::J, Rotation::R180), ["XXX", "..X"]);
        assert_eq!(rows(PieceKind::J, Rotation::R270), [".X", ".X", "XX"]);

        assert_eq!(rows(PieceKind::L, Rotation::R0), ["..X", "XXX"]);
        assert_eq!(rows(PieceKind::L, Rotation::R90), ["X.", "X.", "XX"]);
        assert_eq!(rows(PieceKind::L, Rotation::R180), ["XXX", "X.."]);
        assert_eq!(rows(PieceKind::L, Rotation::R270), ["XX", ".X", ".X"]);
    }

    #[test]
    fn test_s_z_and_i_grids() {
        assert_eq!(rows(PieceKind::S, Rotation::R0), [".XX", "XX."]);
        assert_eq!(rows(PieceKind::S, Rotation::R90), ["X.", "XX", ".X"]);
        assert_eq!(rows(PieceKind::Z, Rotation::R0), ["XX.", ".XX"]);
        assert_eq!(rows(PieceKind::Z, Rotation::R270), [".X", "XX", "X."]);
        assert_eq!(rows(PieceKind::I, Rotation::R0), ["XXXX"]);
        assert_eq!(rows(PieceKind::I, Rotation::R90), ["X", "X", "X", "X"]);
    }
}
