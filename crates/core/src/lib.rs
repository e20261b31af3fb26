//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed (or piece sequence) produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Total**: No operation panics or returns an error; blocked moves report `false`
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with line clearing
//! - [`engine`]: The [`Engine`] state machine: active piece, timers, scoring
//! - [`pieces`]: Static shape table, 7 kinds x 4 rotation states
//! - [`rng`]: Injected piece selection ([`PieceSource`])
//! - [`scoring`]: Fixed line clear and drop points, level from lines
//! - [`snapshot`]: Read-only view handed to the renderer
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the 7 kinds independently
//! - **No wall kicks**: a rotation that does not fit at the same anchor is refused
//! - **Lock Delay**: 500ms once gravity finds the piece resting; moves do not reset it
//! - **Gravity**: 1000ms per row at every level
//! - **Scoring**: 100/300/500/800 per 1-4 lines, +1 per soft-dropped row, +2 per hard-dropped row
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Engine, SequenceSource};
//! use term_tetris_types::PieceKind;
//!
//! let mut game = Engine::with_source(SequenceSource::repeat(PieceKind::O));
//! game.spawn_piece();
//!
//! game.move_piece(1, 0, false);
//! game.rotate_piece(true);
//! game.hard_drop();
//!
//! // Hard drop awards two points per row.
//! assert_eq!(game.score(), 36);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`Engine::update`] once per frame with the elapsed milliseconds.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use engine::{Display, Engine, LockEvent, Phase, Piece};
pub use pieces::{get_shape, PieceShape, SHAPES};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{hard_drop_points, level_for_lines, line_clear_points, soft_drop_points};
pub use snapshot::GameSnapshot;
