use crate::engine::{Display, Phase, Piece};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything the renderer and status panel need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Board with the active piece overlaid
    pub display: Display,
    pub active: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub phase: Phase,
    /// Set by the controlling loop; the engine has no pause concept
    pub paused: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            display: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            phase: Phase::Idle,
            paused: false,
        }
    }
}
