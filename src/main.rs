//! Terminal runner (default binary).
//!
//! One loop owns the engine: it waits for a key or the next gravity tick,
//! applies whatever happened, forwards engine events to the canvas and the
//! event log, and redraws.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tetrino::core::{dispatch, GameState};
use tetrino::input::{handle_key_event, is_actionable, should_quit, should_restart};
use tetrino::term::{BoardCanvas, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrino::{EventKind, EventLog, GameConfig};

/// Upper bound on the input wait, so resizes are picked up promptly.
const FRAME_MS: u64 = 50;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env().with_args(&args)?;

    let mut log = match &config.event_log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            eprintln!("[tetrino] event log disabled: {}: {}", path, e);
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(score) = result {
        eprintln!("[tetrino] final score: {}", score);
    }
    result.map(|_| ())
}

/// Play until the user quits; returns the score at that moment.
fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<u32> {
    let mut game = GameState::with_drop_interval(config.seed, config.drop_interval_ms);
    let mut canvas = BoardCanvas::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    log.record(EventKind::Start {
        seed: config.seed,
        drop_interval_ms: game.timer().interval_ms(),
    });

    let mut last = Instant::now();
    loop {
        for ev in game.drain_events() {
            dispatch([&ev], &mut canvas);
            log.record_engine(&ev);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&canvas, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = Duration::from_millis(game.timer().until_next_ms().min(FRAME_MS));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(key) => {
                    if should_quit(key) {
                        return Ok(game.score());
                    }
                    if should_restart(key) {
                        game.restart();
                        canvas.reset();
                        log.record(EventKind::Restart);
                        last = Instant::now();
                    } else if let Some(command) = handle_key_event(key) {
                        game.apply(command)?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Whole milliseconds only; the fraction stays in `last` for the next frame.
        let elapsed_ms = last.elapsed().as_millis() as u64;
        last += Duration::from_millis(elapsed_ms);
        game.update(elapsed_ms)?;
    }
}
