//! Configuration loading
//!
//! The timer configuration ships embedded in the firmware image as
//! TOML and is parsed once at boot, before any task is spawned.

mod toml;

pub use toml::{parse_config, ParseError};
