//! CLI argument parsing and configuration for chroma-tui.

mod args;

pub use args::{parse_args, Config};
