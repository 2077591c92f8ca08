//! Color scheme service access.
//!
//! This module encapsulates everything that talks to the outside color API:
//! - `client`: request construction and the one-shot HTTP fetch
//! - `error`: transport and parse failures
//! - `random`: random seed colors for the randomize action

mod client;
mod error;
mod random;

pub use client::{ColorApiClient, SchemeSource, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiErrorKind};
pub use random::{random_hex, random_seed};
