//! The glitch effect state machine.
//!
//! A [`GlitchEffect`] is an owned value with an explicit lifecycle:
//! detached -> attached/running -> (resized -> running) -> detached. The host
//! drives it with a monotonic millisecond clock, once per display frame, and
//! redraws when [`GlitchEffect::on_frame`] says so. All operations on a
//! detached effect are silent no-ops; this is a decorative widget, not a
//! system boundary.

use tui_glitch_types::{PixelViewport, GLYPH_CELL_PX_H, GLYPH_CELL_PX_W};

use crate::config::{ConfigError, GlitchConfig};
use crate::grid::GlitchGrid;
use crate::rng::SimpleRng;

pub struct GlitchEffect {
    config: GlitchConfig,
    rng: SimpleRng,
    grid: Option<GlitchGrid>,
    last_tick_ms: u64,
}

impl GlitchEffect {
    /// Create a detached effect. Fails only on invalid configuration.
    pub fn new(config: GlitchConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SimpleRng::new(seed),
            grid: None,
            last_tick_ms: 0,
        })
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.grid.is_some()
    }

    /// The grid, if attached. The view reads cells through this.
    pub fn grid(&self) -> Option<&GlitchGrid> {
        self.grid.as_ref()
    }

    /// Bind to a surface: compute grid dimensions from the viewport's pixel
    /// size and build a fully randomized grid. The first tick fires one
    /// interval after `now_ms`.
    pub fn attach(&mut self, viewport: PixelViewport, now_ms: u64) {
        let (columns, rows) = GlitchGrid::dimensions(
            viewport.width,
            viewport.height,
            GLYPH_CELL_PX_W,
            GLYPH_CELL_PX_H,
        );
        self.grid = Some(GlitchGrid::new(
            columns,
            rows,
            &self.config.glyphs,
            &self.config.palette,
            &mut self.rng,
        ));
        self.last_tick_ms = now_ms;
    }

    /// React to a surface size change: discard the grid entirely and rebuild
    /// against the new dimensions. The index-to-pixel mapping changes with
    /// the column count, so no prior cell state carries over.
    pub fn resize(&mut self, viewport: PixelViewport, now_ms: u64) {
        if self.grid.is_none() {
            return;
        }
        self.attach(viewport, now_ms);
    }

    /// Unbind from the surface. Later frames are no-ops.
    pub fn detach(&mut self) {
        self.grid = None;
    }

    /// Per-frame driver. Returns whether the host should redraw.
    ///
    /// Runs a mutation tick when the tick interval has elapsed, and advances
    /// smooth color transitions every frame regardless of the tick gate.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };

        let mut redraw = false;
        if now_ms.saturating_sub(self.last_tick_ms) >= self.config.tick_interval_ms {
            grid.mutate(
                &self.config.glyphs,
                &self.config.palette,
                self.config.smooth,
                &mut self.rng,
            );
            self.last_tick_ms = now_ms;
            redraw = true;
        }

        if self.config.smooth {
            redraw |= grid.advance_transitions();
        }

        redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(seed: u32) -> GlitchEffect {
        let mut fx = GlitchEffect::new(GlitchConfig::default(), seed).unwrap();
        fx.attach(PixelViewport::new(100, 40), 0);
        fx
    }

    #[test]
    fn attach_builds_grid_from_pixel_size() {
        let fx = attached(1);
        let grid = fx.grid().unwrap();
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.len(), 20);
    }

    #[test]
    fn frame_before_interval_does_not_tick() {
        let mut fx = attached(1);
        // Before the 50ms interval, only settled transitions remain: no work.
        assert!(!fx.on_frame(49));
    }

    #[test]
    fn frame_at_interval_ticks() {
        let mut fx = attached(1);
        assert!(fx.on_frame(50));
    }

    #[test]
    fn detached_effect_is_a_no_op() {
        let mut fx = GlitchEffect::new(GlitchConfig::default(), 1).unwrap();
        assert!(!fx.on_frame(1000));
        assert!(fx.grid().is_none());

        let mut fx = attached(1);
        fx.detach();
        assert!(!fx.on_frame(1000));
        assert!(!fx.is_attached());
    }

    #[test]
    fn resize_rebuilds_grid() {
        let mut fx = attached(1);
        fx.resize(PixelViewport::new(200, 100), 10);
        let grid = fx.grid().unwrap();
        assert_eq!(grid.columns(), 20);
        assert_eq!(grid.rows(), 5);
    }

    #[test]
    fn resize_detached_stays_detached() {
        let mut fx = GlitchEffect::new(GlitchConfig::default(), 1).unwrap();
        fx.resize(PixelViewport::new(200, 100), 10);
        assert!(!fx.is_attached());
    }

    #[test]
    fn smooth_frames_fade_between_ticks() {
        let mut fx = attached(42);
        assert!(fx.on_frame(50)); // tick: some cells start transitions
        // Subsequent frames inside the interval still report work while
        // transitions are in flight.
        assert!(fx.on_frame(66));
    }

    #[test]
    fn snap_config_goes_quiet_between_ticks() {
        let config = GlitchConfig {
            smooth: false,
            ..GlitchConfig::default()
        };
        let mut fx = GlitchEffect::new(config, 42).unwrap();
        fx.attach(PixelViewport::new(100, 40), 0);
        assert!(fx.on_frame(50));
        assert!(!fx.on_frame(66));
        assert!(fx.on_frame(100));
    }
}
