//! Terminal rendering for the glitch effect.
//!
//! The view layer is pure: it maps effect/form state into a framebuffer of
//! styled character cells. Only [`renderer::TerminalRenderer`] touches the
//! terminal, flushing diffs of that framebuffer through crossterm.

pub mod fb;
pub mod glitch_view;
pub mod renderer;
pub mod resize_debounce;

pub use tui_glitch_core as core;
pub use tui_glitch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use glitch_view::{GlitchView, Viewport};
pub use renderer::TerminalRenderer;
pub use resize_debounce::ResizeDebounce;
