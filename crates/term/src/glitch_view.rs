//! GlitchView: maps effect and form state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_glitch_core::color::{center_vignette, outer_vignette, scale};
use tui_glitch_core::{FormPhase, GlitchEffect, WaitlistForm};
use tui_glitch_types::Rgb;

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the glitch background with the optional waitlist overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlitchView;

impl GlitchView {
    /// Render the current state into a framebuffer.
    ///
    /// A detached effect yields a blank (black) frame; the grid simply is
    /// not there to draw.
    pub fn render(
        &self,
        effect: &GlitchEffect,
        form: &WaitlistForm,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::fg(Rgb::BLACK),
        });

        self.draw_grid(&mut fb, effect);
        if form.is_open() {
            self.draw_form(&mut fb, form);
        } else {
            self.draw_hint(&mut fb);
        }
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, effect: &GlitchEffect) {
        let Some(grid) = effect.grid() else {
            return;
        };
        let config = effect.config();
        let columns = grid.columns();
        let rows = grid.rows();
        if columns == 0 || rows == 0 {
            return;
        }

        // Radial distance normalized so the farthest corner sits at 1.
        let half_diag = (0.5f32 * 0.5 + 0.5 * 0.5).sqrt();

        for (i, cell) in grid.cells().iter().enumerate() {
            let x = (i % columns) as u16;
            let y = (i / columns) as u16;

            let mut color = cell.color;
            if config.outer_vignette || config.center_vignette {
                let dx = (x as f32 + 0.5) / columns as f32 - 0.5;
                let dy = (y as f32 + 0.5) / rows as f32 - 0.5;
                let nd = (dx * dx + dy * dy).sqrt() / half_diag;
                if config.outer_vignette {
                    color = scale(color, outer_vignette(nd));
                }
                if config.center_vignette {
                    color = scale(color, center_vignette(nd));
                }
            }

            fb.put_char(x, y, cell.glyph, CellStyle::fg(color));
        }
    }

    fn draw_hint(&self, fb: &mut FrameBuffer) {
        let style = CellStyle::fg(Rgb::new(120, 120, 120));
        let y = fb.height().saturating_sub(1);
        fb.put_str_centered(y, "[w] join the waitlist   [q] quit", style);
    }

    fn draw_form(&self, fb: &mut FrameBuffer, form: &WaitlistForm) {
        let panel_w = (fb.width().saturating_sub(4)).min(44).max(20);
        let panel_h = 7;
        let x = fb.width().saturating_sub(panel_w) / 2;
        let y = fb.height().saturating_sub(panel_h) / 2;

        let panel = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(16, 16, 16),
            bold: false,
        };
        let title = CellStyle {
            bold: true,
            ..panel
        };
        fb.fill_rect(x, y, panel_w, panel_h, ' ', panel);
        self.draw_border(fb, x, y, panel_w, panel_h, panel);

        match form.phase() {
            FormPhase::Submitted => {
                fb.put_str(x + 2, y + 2, "you're on the list.", title);
                fb.put_str(x + 2, y + 4, "esc to close", panel);
            }
            _ => {
                fb.put_str(x + 2, y + 1, "join the waitlist", title);

                // Email field with a trailing cursor block. Truncation is by
                // characters, not bytes; the input accepts multibyte text.
                let field_w = panel_w.saturating_sub(6) as usize;
                let email = form.email();
                let count = email.chars().count();
                let shown: String = if count > field_w {
                    email.chars().skip(count - field_w).collect()
                } else {
                    email.to_string()
                };
                fb.put_str(x + 2, y + 3, "> ", panel);
                fb.put_str(x + 4, y + 3, &shown, panel);
                let cursor_x = x + 4 + shown.chars().count() as u16;
                fb.put_char(cursor_x, y + 3, '_', title);

                let footer = if form.has_error() {
                    "enter a valid email"
                } else {
                    "enter to submit, esc to close"
                };
                let footer_style = if form.has_error() {
                    CellStyle {
                        fg: Rgb::new(220, 90, 90),
                        ..panel
                    }
                } else {
                    CellStyle {
                        fg: Rgb::new(140, 140, 140),
                        ..panel
                    }
                };
                fb.put_str(x + 2, y + 5, footer, footer_style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }
}
