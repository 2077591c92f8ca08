//! UI module for chroma-tui
//!
//! This module contains rendering functions for the TUI interface,
//! including the control bar, the palette grid and the status/hint lines.

mod controls;
mod helpers;
mod palette;
mod render;

pub use render::render;
