//! Terminal Tetris runner (default binary).
//!
//! Renders into a framebuffer, flushes only changed cells and feeds the
//! measured time between frames to the engine.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use term_tetris::core::GameSnapshot;
use term_tetris::input::handle_key_event;
use term_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use term_tetris::{Config, Control, Runner};

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut runner = Runner::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut runner);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "Thanks for playing Tetris! Final score: {}",
        runner.engine().score()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, runner: &mut Runner) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        runner.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let frame = Duration::from_millis(runner.frame_interval() as u64);
        let deadline = last_tick + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(action) = handle_key_event(key) {
                        if runner.dispatch(action) == Control::Quit {
                            return Ok(());
                        }
                    }
                    // Redraw right away so moves feel immediate.
                    break;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    break;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            runner.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
