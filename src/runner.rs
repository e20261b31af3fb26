//! The controlling loop's game logic, without any terminal I/O.
//!
//! Owns the engine and the pause flag, routes input actions, feeds elapsed
//! time to gravity and reports lock and game-over transitions to the session
//! log. `main` only has to poll keys, call [`Runner::dispatch`] and
//! [`Runner::tick`], then draw [`Runner::snapshot_into`].

use anyhow::Result;

use crate::config::Config;
use crate::core::{Engine, GameSnapshot, PieceSource, UniformSource};
use crate::session_log::{LogEvent, SessionLog};
use crate::types::{GameAction, IDLE_TICK_MS};

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Runner<S = UniformSource> {
    engine: Engine<S>,
    paused: bool,
    tick_ms: u32,
    log: SessionLog,
    over_reported: bool,
}

impl Runner<UniformSource> {
    /// Build a session from configuration and spawn the first piece.
    pub fn from_config(config: &Config) -> Result<Self> {
        let log = SessionLog::from_config(config.log_path.as_deref())?;
        let mut runner = Runner::new(Engine::new(config.seed), log);
        runner.tick_ms = config.tick_ms;
        runner.paused = config.start_paused;
        runner.log.record(&LogEvent::Start { seed: config.seed });
        Ok(runner)
    }
}

impl<S: PieceSource> Runner<S> {
    /// Wrap an engine and spawn its first piece.
    pub fn new(mut engine: Engine<S>, log: SessionLog) -> Self {
        engine.spawn_piece();
        let mut runner = Self {
            engine,
            paused: false,
            tick_ms: crate::types::TICK_MS,
            log,
            over_reported: false,
        };
        runner.report();
        runner
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.engine.game_over()
    }

    /// Route one input action.
    ///
    /// Quit always works. After game over only restart is accepted, and while
    /// paused only the pause toggle is.
    pub fn dispatch(&mut self, action: GameAction) -> Control {
        if action == GameAction::Quit {
            self.log.record(&LogEvent::Quit {
                score: self.engine.score(),
            });
            return Control::Quit;
        }

        if self.engine.game_over() {
            if action == GameAction::Restart {
                self.restart();
            }
            return Control::Continue;
        }

        if self.paused && action != GameAction::Pause {
            return Control::Continue;
        }

        match action {
            GameAction::MoveLeft => {
                self.engine.move_piece(-1, 0, false);
            }
            GameAction::MoveRight => {
                self.engine.move_piece(1, 0, false);
            }
            GameAction::SoftDrop => {
                self.engine.move_piece(0, 1, true);
            }
            GameAction::RotateCw => {
                self.engine.rotate_piece(true);
            }
            GameAction::RotateCcw => {
                self.engine.rotate_piece(false);
            }
            GameAction::HardDrop => self.engine.hard_drop(),
            GameAction::Pause => {
                self.paused = !self.paused;
                let event = if self.paused {
                    LogEvent::Pause
                } else {
                    LogEvent::Resume
                };
                self.log.record(&event);
            }
            // Restart only applies once the game is over.
            GameAction::Restart | GameAction::Quit => {}
        }

        self.report();
        Control::Continue
    }

    /// Advance gravity and lock delay by `delta_ms` while the game runs.
    pub fn tick(&mut self, delta_ms: u32) {
        if self.paused || self.engine.game_over() {
            return;
        }
        self.engine.update(delta_ms);
        self.report();
    }

    /// How long the loop should wait between frames.
    pub fn frame_interval(&self) -> u32 {
        if self.engine.game_over() {
            IDLE_TICK_MS
        } else {
            self.tick_ms
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.engine.spawn_piece();
        self.paused = false;
        self.over_reported = false;
        self.log.record(&LogEvent::Restart);
        self.report();
    }

    /// Log the lock and game-over transitions since the last call.
    fn report(&mut self) {
        if let Some(lock) = self.engine.take_last_lock() {
            self.log.record(&LogEvent::from(lock));
        }
        if self.engine.game_over() && !self.over_reported {
            self.over_reported = true;
            self.log.record(&LogEvent::GameOver {
                score: self.engine.score(),
                level: self.engine.level(),
                lines: self.engine.lines(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, SequenceSource};
    use crate::types::{PieceKind, DROP_INTERVAL_MS, TICK_MS};

    fn runner(kind: PieceKind) -> Runner<SequenceSource> {
        Runner::new(
            Engine::with_source(SequenceSource::repeat(kind)),
            SessionLog::disabled(),
        )
    }

    fn over_runner() -> Runner<SequenceSource> {
        let board = Board::from_rows(&["XXXXXXXXX."; 20]);
        Runner::new(
            Engine::from_board(board, SequenceSource::repeat(PieceKind::O)),
            SessionLog::disabled(),
        )
    }

    #[test]
    fn new_runner_spawns_first_piece() {
        let r = runner(PieceKind::T);
        assert!(r.engine().active().is_some());
        assert!(!r.is_paused());
        assert_eq!(r.frame_interval(), TICK_MS);
    }

    #[test]
    fn quit_is_always_honoured() {
        let mut r = runner(PieceKind::T);
        r.dispatch(GameAction::Pause);
        assert_eq!(r.dispatch(GameAction::Quit), Control::Quit);

        let mut r = over_runner();
        assert!(r.is_over());
        assert_eq!(r.dispatch(GameAction::Quit), Control::Quit);
    }

    #[test]
    fn pause_blocks_moves_and_gravity() {
        let mut r = runner(PieceKind::T);
        let before = r.engine().active();

        r.dispatch(GameAction::Pause);
        assert!(r.is_paused());
        r.dispatch(GameAction::MoveLeft);
        r.dispatch(GameAction::HardDrop);
        r.tick(DROP_INTERVAL_MS * 5);
        assert_eq!(r.engine().active(), before);
        assert_eq!(r.engine().drop_timer_ms(), 0);
        assert!(r.snapshot().paused);

        r.dispatch(GameAction::Pause);
        assert!(!r.is_paused());
        r.dispatch(GameAction::MoveLeft);
        assert_eq!(r.engine().active().unwrap().col, before.unwrap().col - 1);
    }

    #[test]
    fn soft_drop_scores() {
        let mut r = runner(PieceKind::O);
        r.dispatch(GameAction::SoftDrop);
        assert_eq!(r.engine().score(), 1);
        assert_eq!(r.engine().active().unwrap().row, 1);
    }

    #[test]
    fn restart_ignored_while_playing() {
        let mut r = runner(PieceKind::O);
        r.dispatch(GameAction::HardDrop);
        let score = r.engine().score();
        r.dispatch(GameAction::Restart);
        assert_eq!(r.engine().score(), score);
        assert_eq!(r.engine().board().filled_count(), 4);
    }

    #[test]
    fn game_over_accepts_only_restart() {
        let mut r = over_runner();
        assert_eq!(r.frame_interval(), IDLE_TICK_MS);

        r.dispatch(GameAction::MoveLeft);
        r.dispatch(GameAction::Pause);
        assert!(!r.is_paused());
        assert!(r.is_over());

        r.dispatch(GameAction::Restart);
        assert!(!r.is_over());
        assert!(r.engine().active().is_some());
        assert_eq!(r.engine().board().filled_count(), 0);
        assert_eq!(r.frame_interval(), TICK_MS);
    }

    #[test]
    fn restart_unpauses() {
        let mut r = over_runner();
        r.paused = true;
        r.dispatch(GameAction::Restart);
        assert!(!r.is_paused());
    }

    #[test]
    fn tick_drives_gravity() {
        let mut r = runner(PieceKind::T);
        r.tick(DROP_INTERVAL_MS);
        assert_eq!(r.engine().active().unwrap().row, 1);
    }

    #[test]
    fn from_config_applies_settings() {
        let cfg = Config {
            seed: 9,
            tick_ms: 50,
            log_path: None,
            start_paused: true,
        };
        let r = Runner::from_config(&cfg).unwrap();
        assert!(r.is_paused());
        assert_eq!(r.frame_interval(), 50);
        assert!(r.engine().active().is_some());
    }
}
