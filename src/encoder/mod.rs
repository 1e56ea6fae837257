//! Entry encoding.
//!
//! - Encoder configuration: keys, level/time/duration/caller formats, presets
//! - JSON encoder: renders one entry per line

mod config;
mod json;

pub use config::*;
pub use json::*;
