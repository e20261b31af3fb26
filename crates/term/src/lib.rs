//! Terminal rendering for the game.
//!
//! Frames are drawn into a plain framebuffer by [`GameView`] and flushed to the
//! terminal by [`TerminalRenderer`], which only re-emits cells that changed.
//! Board cells are drawn 2 columns wide by default so they look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
