//! Shared types and constants for the glitch effect.
//! This crate contains pure data types with no external dependencies.

/// Pixel footprint of one glyph cell on the backing surface.
pub const GLYPH_CELL_PX_W: u32 = 10;
pub const GLYPH_CELL_PX_H: u32 = 20;

/// Effect timing (in milliseconds).
pub const DEFAULT_TICK_MS: u64 = 50;
pub const RESIZE_DEBOUNCE_MS: u64 = 100;
pub const FRAME_MS: u64 = 16;

/// Fraction of cells re-randomized per tick, as a percentage.
pub const MUTATION_PERCENT: usize = 5;

/// Per-frame color transition step.
pub const TRANSITION_STEP: f32 = 0.05;

/// Normalized radius where vignette shading starts (outer) or ends (center).
pub const VIGNETTE_KNEE: f32 = 0.6;

/// Symbol alphabet the effect draws glyphs from.
pub const GLYPH_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '!', '@', '#', '$', '&', '*', '(', ')', '-', '_',
    '+', '=', '/', '[', ']', '{', '}', ';', ':', '<', '>', ',', '0', '1', '2', '3', '4', '5',
    '6', '7', '8', '9',
];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

/// Default palette: near-black, accent blue, white.
pub const DEFAULT_PALETTE: &[Rgb] = &[
    Rgb::new(0x11, 0x11, 0x11),
    Rgb::new(0x61, 0xb3, 0xdc),
    Rgb::new(0xff, 0xff, 0xff),
];

/// Pixel dimensions of the surface the effect renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelViewport {
    pub width: u32,
    pub height: u32,
}

impl PixelViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal of `cols x rows` character cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * GLYPH_CELL_PX_W,
            height: rows as u32 * GLYPH_CELL_PX_H,
        }
    }
}

/// Application-level actions produced by input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    OpenForm,
    CloseForm,
    Input(char),
    Backspace,
    Submit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_sixty_glyphs() {
        assert_eq!(GLYPH_ALPHABET.len(), 60);
    }

    #[test]
    fn terminal_viewport_scales_by_cell_footprint() {
        let vp = PixelViewport::for_terminal(80, 24);
        assert_eq!(vp.width, 800);
        assert_eq!(vp.height, 480);
    }
}
