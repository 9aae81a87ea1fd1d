//! tui-glitch (workspace facade crate).
//!
//! This package keeps a stable `tui_glitch::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_glitch_core as core;
pub use tui_glitch_input as input;
pub use tui_glitch_term as term;
pub use tui_glitch_types as types;
