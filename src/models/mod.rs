//! Data models for chroma-tui
//!
//! This module contains the core data structures:
//! - Seed color normalization
//! - Typed color scheme responses from the color service
//! - Enums for scheme modes and input state

pub mod color;
pub mod enums;
pub mod seed;

// Re-exports for convenient access
pub use color::{ColorEntry, SchemeResult};
pub use enums::{InputMode, SchemeMode};
pub use seed::{SeedColor, SeedColorError, DEFAULT_SEED};
