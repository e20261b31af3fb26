//! Engine module - the complete game state machine
//!
//! Ties together the board, the shape table, the piece source and scoring. It
//! owns every piece of mutable state; callers drive it with operations and poll
//! the read accessors afterwards.
//!
//! Per active piece the engine moves through
//! `Falling -> Locking -> committed -> Falling (next piece)`, with `GameOver`
//! reached only when a spawn does not fit.
//!
//! Lock delay is not reset by a successful move or rotation while locking: the
//! timer keeps counting from its current value.

use crate::board::Board;
use crate::pieces::{get_shape, PieceShape};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{hard_drop_points, level_for_lines, line_clear_points, soft_drop_points};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Visible playfield grid, `[row][col]`
pub type Display = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the shape grid's top-left corner
    pub col: i8,
    /// Row of the shape grid's top-left corner
    pub row: i8,
}

impl Piece {
    /// Create a piece at its spawn position: rotation 0, horizontally
    /// centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let width = get_shape(kind, Rotation::R0).width;
        Self {
            kind,
            rotation: Rotation::R0,
            col: ((BOARD_WIDTH - width) / 2) as i8,
            row: 0,
        }
    }

    /// Occupancy grid for the current rotation
    pub fn shape(&self) -> &'static PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates `(col, row)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        let (col, row) = (self.col as i16, self.row as i16);
        self.shape()
            .cells
            .iter()
            .map(move |&(dc, dr)| (col + dc as i16, row + dr as i16))
    }

    /// Same piece with the anchor shifted; `None` if the anchor would overflow
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(dx)?,
            row: self.row.checked_add(dy)?,
            ..*self
        })
    }

    /// Same anchor, next rotation state
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..*self }
    }
}

/// Where the engine is in the per-piece lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No active piece and not over (before the first spawn)
    Idle,
    Falling,
    /// Resting, lock-delay timer running
    Locking,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::GameOver => "game over",
        }
    }
}

/// Emitted after a piece is committed to the board.
///
/// Kept until taken so the controlling loop can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<S = UniformSource> {
    board: Board,
    active: Option<Piece>,
    source: S,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    locking: bool,
    last_lock: Option<LockEvent>,
}

impl Engine<UniformSource> {
    /// Create a new game picking pieces uniformly from a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformSource::new(seed))
    }
}

impl Default for Engine<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> Engine<S> {
    /// Create a new game with an explicit piece source
    pub fn with_source(source: S) -> Self {
        Self::from_board(Board::new(), source)
    }

    /// Create a new game starting from a prepared board
    pub fn from_board(board: Board, source: S) -> Self {
        Self {
            board,
            active: None,
            source,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            locking: false,
            last_lock: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_locking(&self) -> bool {
        self.locking
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_none() {
            Phase::Idle
        } else if self.locking {
            Phase::Locking
        } else {
            Phase::Falling
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Spawn a new piece drawn from the source.
    ///
    /// If the spawn position does not fit, the game is over and no piece is
    /// active. Does nothing once the game is over.
    pub fn spawn_piece(&mut self) {
        if self.game_over {
            return;
        }

        let piece = Piece::spawn(self.source.next_kind());
        if self.is_valid_move(&piece) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.game_over = true;
        }
    }

    /// Check a candidate piece against the walls, the floor and the stack.
    ///
    /// Cells above the board (row < 0) only have to respect the side walls.
    pub fn is_valid_move(&self, piece: &Piece) -> bool {
        piece.cells().all(|(col, row)| {
            if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
                return false;
            }
            row < 0 || !self.board.is_filled(col as i8, row as i8)
        })
    }

    /// Try to shift the active piece by `(dx, dy)`.
    ///
    /// With `soft_drop` set, a successful downward move scores one point.
    pub fn move_piece(&mut self, dx: i8, dy: i8, soft_drop: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let Some(candidate) = active.shifted(dx, dy) else {
            return false;
        };
        if !self.is_valid_move(&candidate) {
            return false;
        }

        self.active = Some(candidate);
        if soft_drop && dy > 0 {
            self.score = self.score.saturating_add(soft_drop_points(1));
        }
        true
    }

    /// Rotate the active piece a quarter turn at the same anchor.
    ///
    /// A blocked rotation leaves the piece untouched. Returns whether it rotated.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated(clockwise);
        if !self.is_valid_move(&candidate) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately.
    ///
    /// Scores two points per row descended and skips the lock delay.
    pub fn hard_drop(&mut self) {
        if self.active.is_none() {
            return;
        }

        let mut distance: u32 = 0;
        while self.move_piece(0, 1, false) {
            distance += 1;
        }
        self.score = self.score.saturating_add(hard_drop_points(distance));

        self.commit_and_respawn();
    }

    /// Commit the active piece to the board, clear lines and drop the piece.
    ///
    /// Cells above the board are discarded. The caller spawns the next piece.
    pub fn place_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (col, row) in active.cells() {
            if row >= 0 {
                self.board.set(col as i8, row as i8, Cell::Filled);
            }
        }

        let lines_cleared = self.clear_lines();
        self.last_lock = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            line_clear_score: line_clear_points(lines_cleared),
            score: self.score,
            level: self.level,
            lines: self.lines,
        });
    }

    /// Remove every complete row and score the burst.
    ///
    /// Returns the number of lines cleared in this pass.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_points(cleared));
            self.lines = self.lines.saturating_add(cleared);
            self.level = level_for_lines(self.lines);
        }
        cleared
    }

    /// Advance time by `delta_ms`.
    ///
    /// Runs the lock-delay timer first (if locking), then gravity. Gravity
    /// resets its timer whenever it fires, whether or not the piece moved.
    ///
    /// The remainder past the drop interval is discarded and at most one row
    /// falls per call, so split updates only match a single large update when
    /// every split lands exactly on the interval.
    pub fn update(&mut self, delta_ms: u32) {
        if self.game_over {
            return;
        }

        if self.locking {
            self.lock_timer_ms = self.lock_timer_ms.saturating_add(delta_ms);
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.commit_and_respawn();
                if self.game_over {
                    return;
                }
            }
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(delta_ms);
        if self.drop_timer_ms >= DROP_INTERVAL_MS {
            self.drop_timer_ms = 0;
            if self.active.is_some() && !self.move_piece(0, 1, false) && !self.locking {
                self.locking = true;
                self.lock_timer_ms = 0;
            }
        }
    }

    fn commit_and_respawn(&mut self) {
        self.place_piece();
        self.locking = false;
        self.lock_timer_ms = 0;
        self.spawn_piece();
    }

    /// Board with the active piece overlaid
    ///
    /// Piece cells outside the visible grid are left out.
    pub fn display(&self) -> Display {
        let mut display = self.board.to_grid();
        if let Some(active) = self.active {
            for (col, row) in active.cells() {
                if (0..BOARD_WIDTH as i16).contains(&col) && (0..BOARD_HEIGHT as i16).contains(&row)
                {
                    display[row as usize][col as usize] = Cell::Filled;
                }
            }
        }
        display
    }

    /// Start over: empty board, no piece, counters and timers cleared.
    ///
    /// The piece source keeps its state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.drop_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.locking = false;
        self.last_lock = None;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.display = self.display();
        out.active = self.active;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<Piece>) {
        self.active = piece;
    }
}
