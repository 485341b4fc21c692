//! Terminal Tic Tac Toe runner (default binary).
//!
//! One single-threaded loop: draw, wait for input until the next tick,
//! apply at most one click, advance the clocks.

mod cli;
mod logging;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use tracing::info;

use tictactoe::core::{Confetti, Session};
use tictactoe::input::map_event;
use tictactoe::term::{
    BoardLayout, EffectsView, FrameBuffer, GameView, Hit, RenderThrottle, TerminalRenderer,
    Viewport,
};
use tictactoe::types::{InputEvent, TICK_MS};

use cli::Cli;

/// Redraw an unchanged screen at least this often.
const KEEPALIVE_MS: u64 = 250;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.session_config();
    let session = Session::new(config)?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(?config, seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut session: Session, seed: u32) -> Result<()> {
    let view = GameView::default();
    let mut confetti = Confetti::new(seed);
    let mut throttle = RenderThrottle::new(KEEPALIVE_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut pointer: Option<(u16, u16)> = None;

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = clock.elapsed();

    loop {
        let snap = session.snapshot();
        confetti.sync(&snap);
        let layout = BoardLayout::fit(viewport);

        // Render.
        let close_hovered = pointer
            .map(|(x, y)| layout.close_button().contains(x, y))
            .unwrap_or(false);
        let fingerprint = snap.fingerprint() ^ close_hovered as u64;
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, confetti.is_falling()) {
            let effects = EffectsView {
                confetti: &confetti,
                close_hovered,
            };
            view.render_into_with_effects(&snap, Some(&effects), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(clock.elapsed().saturating_sub(last_tick))
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::PointerPressed { x, y }) => match layout.hit_test(x, y) {
                    Some(Hit::Close) => return Ok(()),
                    Some(Hit::Cell { row, col }) => {
                        // Occupied cells and clicks during the celebration are ignored.
                        let _ = session.handle_move(row, col);
                    }
                    None => {}
                },
                Some(InputEvent::PointerMoved { x, y }) => pointer = Some((x, y)),
                Some(InputEvent::Resize { width, height }) => {
                    viewport = Viewport::new(width, height);
                    term.invalidate();
                    throttle.invalidate();
                }
                None => {}
            }
        }

        // Tick with the real elapsed time; the session only cares about the total.
        let now = clock.elapsed();
        if now.saturating_sub(last_tick) >= tick_duration {
            let elapsed_ms = (now.as_millis() - last_tick.as_millis()) as u32;
            last_tick = now;
            session.tick(elapsed_ms);
            confetti.tick(elapsed_ms);
        }
    }
}
