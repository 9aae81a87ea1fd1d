//! Glitch background runner (default binary).
//!
//! Runs the letter-glitch effect full-screen in the alternate screen, with a
//! small waitlist overlay toggled from the keyboard. Input and rendering use
//! crossterm through a custom framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_glitch::core::{GlitchConfig, GlitchEffect, WaitlistForm};
use tui_glitch::input::{handle_key_event, should_quit};
use tui_glitch::term::{GlitchView, ResizeDebounce, TerminalRenderer, Viewport};
use tui_glitch::types::{AppAction, PixelViewport, FRAME_MS, RESIZE_DEBOUNCE_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let start = Instant::now();
    let now_ms = move || start.elapsed().as_millis() as u64;

    // Seed from the wall clock; determinism only matters in tests.
    let seed = std::time::UNIX_EPOCH
        .elapsed()
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let (mut cols, mut rows) = crossterm::terminal::size().unwrap_or((80, 24));

    let mut effect = GlitchEffect::new(GlitchConfig::default(), seed)?;
    effect.attach(PixelViewport::for_terminal(cols, rows), now_ms());

    let mut form = WaitlistForm::new();
    let view = GlitchView::default();
    let mut debounce = ResizeDebounce::new(RESIZE_DEBOUNCE_MS);

    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        // Render only when the effect or overlay changed.
        if dirty {
            let mut fb = view.render(&effect, &form, Viewport::new(cols, rows));
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key, form.is_open()) {
                        // Teardown: stop the effect and drop any pending
                        // debounced resize so nothing fires after detach.
                        debounce.cancel();
                        effect.detach();
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, form.is_open()) {
                        match action {
                            AppAction::OpenForm => form.open(),
                            AppAction::CloseForm => form.close(),
                            AppAction::Input(c) => form.input_char(c),
                            AppAction::Backspace => form.backspace(),
                            AppAction::Submit => {
                                form.submit();
                            }
                        }
                        dirty = true;
                    }
                }
                Event::Resize(w, h) => {
                    // Bursty while dragging; settle in the debounce first.
                    debounce.observe(now_ms(), w, h);
                }
                _ => {}
            }
        }

        // Frame step.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            let now = now_ms();

            if let Some((w, h)) = debounce.poll(now) {
                cols = w;
                rows = h;
                effect.resize(PixelViewport::for_terminal(cols, rows), now);
                term.invalidate();
                dirty = true;
            }

            dirty |= effect.on_frame(now);
        }
    }
}
