//! The glitch grid: cell storage, sizing math, and per-tick mutation.
//!
//! Everything here is pure over a caller-supplied RNG, glyph set, and
//! palette, so tick semantics can be unit tested without a surface.

use tui_glitch_types::{Rgb, MUTATION_PERCENT, TRANSITION_STEP};

use crate::color::interpolate;
use crate::rng::SimpleRng;

/// One character slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchCell {
    /// Symbol currently shown.
    pub glyph: char,
    /// Color currently rendered.
    pub color: Rgb,
    /// Color the cell is transitioning toward.
    pub target: Rgb,
    /// Interpolation start point (the color at the moment of mutation).
    pub from: Rgb,
    /// Normalized transition progress; 1 means `color == target`.
    pub progress: f32,
}

/// A `columns x rows` grid of cells stored row-major in a flat Vec.
///
/// Cell `i` sits at `(i % columns, i / columns)`.
#[derive(Debug, Clone)]
pub struct GlitchGrid {
    columns: usize,
    rows: usize,
    cells: Vec<GlitchCell>,
}

impl GlitchGrid {
    /// Grid dimensions covering a `width_px x height_px` surface with cells
    /// of `cell_w x cell_h` pixels. Partial cells at the right/bottom edges
    /// round up so the surface is always fully covered.
    pub fn dimensions(width_px: u32, height_px: u32, cell_w: u32, cell_h: u32) -> (usize, usize) {
        let columns = width_px.div_ceil(cell_w) as usize;
        let rows = height_px.div_ceil(cell_h) as usize;
        (columns, rows)
    }

    /// Build a fully randomized grid. Initial colors come from the palette
    /// with no transition in flight: each cell starts settled, its target
    /// pinned to its color until the first mutation retargets it.
    pub fn new(
        columns: usize,
        rows: usize,
        glyphs: &[char],
        palette: &[Rgb],
        rng: &mut SimpleRng,
    ) -> Self {
        let total = columns * rows;
        let mut cells = Vec::with_capacity(total);
        for _ in 0..total {
            let color = *rng.pick(palette);
            cells.push(GlitchCell {
                glyph: *rng.pick(glyphs),
                color,
                target: color,
                from: color,
                progress: 1.0,
            });
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GlitchCell] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&GlitchCell> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.cells.get(y * self.columns + x)
    }

    /// Number of cells re-randomized per tick: 5% of the grid, at least one.
    pub fn mutation_sample_size(&self) -> usize {
        (self.cells.len() * MUTATION_PERCENT / 100).max(1)
    }

    /// One mutation tick: re-randomize a sample of cells.
    ///
    /// Cells are chosen uniformly **with replacement**; a collision means
    /// fewer distinct cells change that tick. Each chosen cell gets a new
    /// glyph and target color. Without smoothing the color snaps to the
    /// target immediately; with smoothing the current color holds and a new
    /// transition starts from it.
    pub fn mutate(&mut self, glyphs: &[char], palette: &[Rgb], smooth: bool, rng: &mut SimpleRng) {
        if self.cells.is_empty() {
            return;
        }
        let count = self.mutation_sample_size();
        for _ in 0..count {
            let index = rng.next_range(self.cells.len() as u32) as usize;
            let cell = &mut self.cells[index];
            cell.glyph = *rng.pick(glyphs);
            cell.target = *rng.pick(palette);
            if smooth {
                cell.from = cell.color;
                cell.progress = 0.0;
            } else {
                cell.color = cell.target;
                cell.from = cell.target;
                cell.progress = 1.0;
            }
        }
    }

    /// Advance every in-flight transition by one fixed step.
    ///
    /// Progress moves in 0.05 increments, clamped at 1; the rendered color
    /// is re-interpolated from the transition start point. Returns whether
    /// any cell changed (the caller redraws only then).
    pub fn advance_transitions(&mut self) -> bool {
        let mut changed = false;
        for cell in &mut self.cells {
            if cell.progress >= 1.0 {
                continue;
            }
            cell.progress = (cell.progress + TRANSITION_STEP).min(1.0);
            if cell.progress >= 1.0 {
                // Pin exactly to the target so equality checks hold.
                cell.color = cell.target;
            } else {
                cell.color = interpolate(cell.from, cell.target, cell.progress);
            }
            changed = true;
        }
        changed
    }
}
