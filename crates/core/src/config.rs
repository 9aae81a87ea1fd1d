//! Effect configuration and validation.

use std::fmt;

use tui_glitch_types::{Rgb, DEFAULT_PALETTE, DEFAULT_TICK_MS, GLYPH_ALPHABET};

/// Configuration for one glitch effect instance.
#[derive(Debug, Clone)]
pub struct GlitchConfig {
    /// Colors that glyphs pick their targets from.
    pub palette: Vec<Rgb>,
    /// Symbols glyphs are drawn from.
    pub glyphs: Vec<char>,
    /// Minimum wall-clock time between mutation ticks.
    pub tick_interval_ms: u64,
    /// Animate color changes gradually instead of snapping.
    pub smooth: bool,
    /// Radial fade toward the edges.
    pub outer_vignette: bool,
    /// Radial fade at the center.
    pub center_vignette: bool,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            glyphs: GLYPH_ALPHABET.to_vec(),
            tick_interval_ms: DEFAULT_TICK_MS,
            smooth: true,
            outer_vignette: true,
            center_vignette: false,
        }
    }
}

impl GlitchConfig {
    /// Reject configurations the sampler cannot operate on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.glyphs.is_empty() {
            return Err(ConfigError::EmptyGlyphSet);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Why a [`GlitchConfig`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPalette,
    EmptyGlyphSet,
    ZeroTickInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one color"),
            ConfigError::EmptyGlyphSet => write!(f, "glyph set must contain at least one symbol"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GlitchConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_palette_rejected() {
        let cfg = GlitchConfig {
            palette: Vec::new(),
            ..GlitchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn empty_glyph_set_rejected() {
        let cfg = GlitchConfig {
            glyphs: Vec::new(),
            ..GlitchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGlyphSet));
    }

    #[test]
    fn zero_tick_interval_rejected() {
        let cfg = GlitchConfig {
            tick_interval_ms: 0,
            ..GlitchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
