//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_memory::app::{App, Flow};
use tui_memory::config::AppConfig;
use tui_memory::logging::setup_logging;
use tui_memory::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_memory::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::load();
    let _log_guard = setup_logging(&config.log_dir)?;
    tracing::info!(
        seed = config.seed,
        difficulty = config.difficulty.map(|d| d.as_str()),
        sound = config.sound,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => tracing::info!("exiting"),
        Err(err) => tracing::error!(error = %err, "exiting with error"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let started = Instant::now();
    let mut last_update = Instant::now();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint()) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = frame
            .checked_sub(last_update.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.invalidate();
                }
                other => {
                    if app.handle_event(other, viewport) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
        }

        let elapsed = last_update.elapsed();
        if elapsed >= frame {
            last_update = Instant::now();
            app.update(elapsed.as_millis() as u32);
        }

        if app.take_bells() > 0 {
            term.bell()?;
        }
    }
}
