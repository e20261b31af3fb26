//! Board tests

use term_tetris::core::Board;
use term_tetris::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_filled(-1, -1));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Cell::Filled));
    assert_eq!(board.get(5, 10), Some(Cell::Filled));
    assert!(board.is_filled(5, 10));

    assert!(board.set(5, 10, Cell::Empty));
    assert_eq!(board.get(5, 10), Some(Cell::Empty));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Cell::Filled));
    assert!(!board.set(0, -1, Cell::Filled));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Cell::Filled));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Cell::Filled));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_row_helpers() {
    let board = Board::from_rows(&["XXXXXXXXXX", "XXXXX....."]);
    assert!(board.is_row_full(18));
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(20));
    assert_eq!(board.row(19).unwrap().iter().filter(|c| c.is_filled()).count(), 5);
    assert!(board.row(20).is_none());
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_from_rows_ignores_extra_rows_and_columns() {
    let mut rows = vec!["X"; 25];
    rows[24] = "..........XXXX";
    let board = Board::from_rows(&rows);
    // The first five rows fall off the top.
    assert_eq!(board.filled_count(), 19);
    assert!(!board.is_filled(0, 19));
}

#[test]
fn test_clear_full_rows_reports_bottom_to_top() {
    let mut board = Board::from_rows(&[
        "XXXXXXXXXX",
        "X.........",
        "XXXXXXXXXX",
        "XXXXXXXXXX",
    ]);
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18, 16]);
    assert_eq!(board.filled_count(), 1);
    assert!(board.is_filled(0, 19));
}

#[test]
fn test_clear_keeps_relative_order() {
    let mut board = Board::from_rows(&[
        "X.........",
        "XXXXXXXXXX",
        ".X........",
        "XXXXXXXXXX",
        "..X.......",
    ]);
    board.clear_full_rows();
    assert!(board.is_filled(0, 17));
    assert!(board.is_filled(1, 18));
    assert!(board.is_filled(2, 19));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::from_rows(&["XXXXXXXXXX"; 20]);
    assert_eq!(board.clear_full_rows().len(), 20);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_to_grid_and_clear() {
    let mut board = Board::from_rows(&["#.#......."]);
    let grid = board.to_grid();
    assert_eq!(grid[19][0], Cell::Filled);
    assert_eq!(grid[19][1], Cell::Empty);
    assert_eq!(grid[19][2], Cell::Filled);

    board.clear();
    assert_eq!(board, Board::default());
}
