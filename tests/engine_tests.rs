//! Engine scenarios driven only through the public API.

use term_tetris::core::{Board, Engine, Phase, SequenceSource};
use term_tetris::types::{PieceKind, DROP_INTERVAL_MS, LOCK_DELAY_MS};

fn o_engine() -> Engine<SequenceSource> {
    Engine::with_source(SequenceSource::repeat(PieceKind::O))
}

fn shift_to(engine: &mut Engine<SequenceSource>, col: i8) {
    let current = engine.active().unwrap().col;
    let step = if col < current { -1 } else { 1 };
    while engine.active().unwrap().col != col {
        assert!(engine.move_piece(step, 0, false));
    }
}

#[test]
fn five_o_pieces_clear_two_lines() {
    let mut engine = o_engine();
    engine.spawn_piece();

    for col in [0, 2, 4, 6, 8] {
        shift_to(&mut engine, col);
        engine.hard_drop();
    }

    // 18 rows of hard drop each, then a double.
    assert_eq!(engine.score(), 5 * 36 + 300);
    assert_eq!(engine.lines(), 2);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.board().filled_count(), 0);
    assert_eq!(engine.phase(), Phase::Falling);
}

#[test]
fn vertical_i_into_well_scores_tetris() {
    let board = Board::from_rows(&["XXXXXXXXX."; 4]);
    let mut engine = Engine::from_board(board, SequenceSource::repeat(PieceKind::I));
    engine.spawn_piece();

    assert!(engine.rotate_piece(true));
    shift_to(&mut engine, 9);
    engine.hard_drop();

    assert_eq!(engine.lines(), 4);
    assert_eq!(engine.score(), 32 + 800);
    assert_eq!(engine.board().filled_count(), 0);
}

#[test]
fn ten_lines_advance_level() {
    let board = Board::from_rows(&["XXXXXXXXX."; 12]);
    let mut engine = Engine::from_board(board, SequenceSource::repeat(PieceKind::I));

    // Three vertical I pieces down the well clear 12 rows.
    for _ in 0..3 {
        engine.spawn_piece();
        assert!(!engine.game_over());
        assert!(engine.rotate_piece(true));
        shift_to(&mut engine, 9);
        engine.hard_drop();
    }

    assert_eq!(engine.lines(), 12);
    assert_eq!(engine.level(), 2);
}

#[test]
fn blocked_spawn_ends_game_and_freezes_state() {
    let board = Board::from_rows(&["....XX...."; 18]);
    let mut engine = Engine::from_board(board, SequenceSource::repeat(PieceKind::O));
    engine.spawn_piece();
    assert!(!engine.game_over());

    // Resting on the tower: locking it leaves no room for the next spawn.
    engine.hard_drop();
    assert!(engine.game_over());
    assert!(engine.active().is_none());
    assert_eq!(engine.phase(), Phase::GameOver);

    let score = engine.score();
    let board = engine.board().clone();
    assert!(!engine.move_piece(-1, 0, false));
    assert!(!engine.rotate_piece(true));
    engine.hard_drop();
    engine.update(DROP_INTERVAL_MS * 10);
    assert_eq!(engine.score(), score);
    assert_eq!(engine.board(), &board);

    engine.reset();
    engine.spawn_piece();
    assert!(!engine.game_over());
    assert!(engine.active().is_some());
}

#[test]
fn gravity_then_lock_delay_commits_piece() {
    let mut engine = Engine::with_source(SequenceSource::repeat(PieceKind::T));
    engine.spawn_piece();

    // T is two rows tall: 18 gravity steps reach the floor.
    for step in 1..=18 {
        engine.update(DROP_INTERVAL_MS);
        assert_eq!(engine.active().unwrap().row, step);
    }
    assert_eq!(engine.phase(), Phase::Falling);

    engine.update(DROP_INTERVAL_MS);
    assert_eq!(engine.phase(), Phase::Locking);

    engine.update(LOCK_DELAY_MS / 2);
    assert_eq!(engine.board().filled_count(), 0);
    engine.update(LOCK_DELAY_MS / 2);

    assert_eq!(engine.board().filled_count(), 4);
    assert_eq!(engine.active().unwrap().row, 0);
    assert_eq!(engine.score(), 0);
    let lock = engine.take_last_lock().unwrap();
    assert_eq!(lock.kind, PieceKind::T);
    assert_eq!(lock.lines_cleared, 0);
}

#[test]
fn soft_drop_scores_per_row() {
    let mut engine = o_engine();
    engine.spawn_piece();
    let mut rows = 0;
    while engine.move_piece(0, 1, true) {
        rows += 1;
    }
    assert_eq!(rows, 18);
    assert_eq!(engine.score(), 18);
}

#[test]
fn same_seed_same_game() {
    let mut a = Engine::new(42);
    let mut b = Engine::new(42);
    a.spawn_piece();
    b.spawn_piece();

    for i in 0..40 {
        for engine in [&mut a, &mut b] {
            engine.move_piece(if i % 3 == 0 { -1 } else { 1 }, 0, false);
            engine.rotate_piece(i % 2 == 0);
            engine.update(250);
            if i % 4 == 0 {
                engine.hard_drop();
            }
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn display_shows_board_and_active_piece() {
    let board = Board::from_rows(&["X........."]);
    let mut engine = Engine::from_board(board, SequenceSource::repeat(PieceKind::I));
    engine.spawn_piece();

    let display = engine.display();
    assert!(display[19][0].is_filled());
    assert!((3..7).all(|c| display[0][c].is_filled()));
    assert_eq!(display.iter().flatten().filter(|c| c.is_filled()).count(), 5);
}
