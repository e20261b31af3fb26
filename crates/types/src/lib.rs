//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Standard Tetris playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Render/update cadence (~30 FPS) |
//! | `IDLE_TICK_MS` | 200 | Cadence while the game is over |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity, constant at every level |
//! | `LOCK_DELAY_MS` | 500 | Time before a resting piece locks |
//!
//! # Scoring
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! Points are fixed and never multiplied by level. Soft drop awards 1 point per
//! row, hard drop 2 points per row.
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, Rotation, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Rotate
//! let rotation = Rotation::R0;
//! assert_eq!(rotation.rotate_cw(), Rotation::R90);
//! assert_eq!(rotation.rotate_ccw(), Rotation::R270);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Render/update cadence in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 33;

/// Cadence of the controlling loop once the game is over
pub const IDLE_TICK_MS: u32 = 200;

/// Gravity interval (1000ms = 1 row per second). Level does not change it.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Grace period between a piece coming to rest and being committed
pub const LOCK_DELAY_MS: u32 = 500;

/// Line clear points indexed by lines cleared in one pass (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points for a burst that falls outside `LINE_SCORES`
pub const LINE_SCORE_FALLBACK: u32 = 100;

/// Points per row for a manual soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(LOCK_DELAY_MS, 500);
        assert_eq!(TICK_MS, 33);
        assert_eq!(IDLE_TICK_MS, 200);
    }

    #[test]
    fn scoring_table() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(LINE_SCORE_FALLBACK, 100);
        assert_eq!(SOFT_DROP_POINTS, 1);
        assert_eq!(HARD_DROP_POINTS, 2);
    }

    #[test]
    fn rotation_cycles_in_both_directions() {
        let mut r = Rotation::R0;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::R0);

        for _ in 0..4 {
            r = r.rotate_ccw();
        }
        assert_eq!(r, Rotation::R0);
        assert_eq!(Rotation::R90.rotate_ccw(), Rotation::R0);
        assert_eq!(Rotation::R0.rotate_ccw().index(), 3);
    }

    #[test]
    fn piece_kind_indices_follow_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn game_action_round_trips_names() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::HardDrop,
            GameAction::Pause,
            GameAction::Restart,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("hold"), None);
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order. Uniform selection draws an index into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`] and in the shape table
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// The four rotation states, in clockwise order
///
/// Rotation arithmetic is plain mod 4: clockwise adds one quarter turn,
/// counter-clockwise subtracts one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Spawn orientation
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotation index (0-3)
    pub const fn index(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Build from an index, wrapping mod 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R90);
    /// assert_eq!(Rotation::R270.rotate_cw(), Rotation::R0);
    /// ```
    pub const fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_ccw(), Rotation::R270);
    /// assert_eq!(Rotation::R90.rotate_ccw(), Rotation::R0);
    /// ```
    pub const fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotation in degrees (0, 90, 180, 270)
    pub const fn degrees(self) -> u16 {
        (self.index() as u16) * 90
    }
}

/// A cell on the game board: occupancy only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Discrete player actions produced by the input mapper
///
/// Movement, rotation and drops map onto engine operations. Pause, restart and
/// quit are policy of the controlling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("HARDDROP"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}
