//! Terminal Tetris (workspace facade crate).
//!
//! The game rules live in `crates/core`, key mapping in `crates/input` and
//! drawing in `crates/term`. This package re-exports them and adds the pieces
//! that tie a session together: configuration, the session log and the
//! controlling loop.

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub mod config;
pub mod runner;
pub mod session_log;

pub use config::Config;
pub use runner::{Control, Runner};
pub use session_log::{LogEvent, SessionLog};
