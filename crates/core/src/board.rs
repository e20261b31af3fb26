//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or filled.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges
//! 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clearing pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, aligned to the bottom of the board.
    ///
    /// `X` or `#` marks a filled cell; anything else is empty. Rows longer than
    /// the board are truncated and extra rows above the top are ignored.
    ///
    /// ```
    /// use term_tetris_core::Board;
    ///
    /// let board = Board::from_rows(&["X.........", "XXXXXXXXX."]);
    /// assert!(board.is_filled(0, 18));
    /// assert!(!board.is_filled(9, 19));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let skip = rows.len().saturating_sub(height);
        let top = height - (rows.len() - skip);
        for (i, line) in rows.iter().skip(skip).enumerate() {
            for (col, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == 'X' || ch == '#' {
                    board.set(col as i8, (top + i) as i8, Cell::Filled);
                }
            }
        }
        board
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (col, row); `None` if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if out of bounds.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (col, row) is on the board and filled
    pub fn is_filled(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Cell::Filled))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|c| c.is_filled()))
            .unwrap_or(false)
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = row * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Remove every full row and compact the rows above it downwards.
    ///
    /// Rows are scanned bottom to top in a single pass; each physical row is
    /// examined exactly once. A removed row is replaced by an empty row at the
    /// top. Returns the indices (before compaction) of the removed rows, bottom
    /// to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(Cell::Empty);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Copy out as a 2D grid
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
