//! Append-only JSON-lines log of notable session events.
//!
//! The terminal belongs to the game while it runs, so this is the only place
//! diagnostics go. Logging never interrupts play: after the first write error
//! the log disables itself.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::LockEvent;

/// One line of the session log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    Start {
        seed: u32,
    },
    Lock {
        piece: String,
        lines_cleared: u32,
        /// Points from this clear alone
        line_clear_score: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    GameOver {
        score: u32,
        level: u32,
        lines: u32,
    },
    Pause,
    Resume,
    Restart,
    Quit {
        score: u32,
    },
}

impl From<LockEvent> for LogEvent {
    fn from(ev: LockEvent) -> Self {
        LogEvent::Lock {
            piece: ev.kind.as_str().to_string(),
            lines_cleared: ev.lines_cleared,
            line_clear_score: ev.line_clear_score,
            score: ev.score,
            level: ev.level,
            lines: ev.lines,
        }
    }
}

pub struct SessionLog {
    out: Option<Box<dyn Write + Send>>,
    buf: Vec<u8>,
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for SessionLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLog")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl SessionLog {
    /// A log that drops everything
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self::from_writer(file))
    }

    /// Open `path` when given, otherwise a disabled log.
    pub fn from_config(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn from_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Write one event as a JSON line.
    pub fn record(&mut self, event: &LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).and_then(|_| out.flush()).is_err() {
            self.out = None;
        }
    }
}
