//! Core effect logic - pure, deterministic, and testable
//!
//! This crate contains the whole glitch state machine and its numeric helpers.
//! It has **zero dependencies** on the terminal, rendering, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical glyph/color sequence
//! - **Testable**: Every tick and transition can be unit tested headless
//! - **Portable**: Any frontend that can draw colored glyphs can host it
//!
//! # Module Structure
//!
//! - [`color`]: hex parsing, linear interpolation, vignette attenuation
//! - [`config`]: effect configuration with validation
//! - [`effect`]: the attach/tick/resize/detach state machine
//! - [`form`]: waitlist email form (validation + submit states)
//! - [`grid`]: the cell grid, sizing math, and per-tick mutation
//! - [`rng`]: small seeded LCG used for all sampling
//!
//! # Example
//!
//! ```
//! use tui_glitch_core::{GlitchConfig, GlitchEffect};
//! use tui_glitch_types::PixelViewport;
//!
//! let mut fx = GlitchEffect::new(GlitchConfig::default(), 12345).unwrap();
//! fx.attach(PixelViewport::new(800, 480), 0);
//!
//! // Drive it once per display frame with a monotonic clock.
//! let needs_redraw = fx.on_frame(50);
//! assert!(needs_redraw);
//! ```

pub mod color;
pub mod config;
pub mod effect;
pub mod form;
pub mod grid;
pub mod rng;

pub use tui_glitch_types as types;

// Re-export commonly used types for convenience
pub use color::{interpolate, parse_hex, scale};
pub use config::{ConfigError, GlitchConfig};
pub use effect::GlitchEffect;
pub use form::{is_valid_email, FormPhase, WaitlistForm};
pub use grid::{GlitchCell, GlitchGrid};
pub use rng::SimpleRng;
