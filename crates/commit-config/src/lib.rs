//! Parser-configuration resolution for the release pipeline.
//!
//! A release configuration names the commit-message convention to parse
//! with: a `preset` (published convention name), a `config` (full module
//! name), and/or explicit parser option overrides. This crate resolves that
//! selection into one merged [`ParserOptions`](commit_opts::ParserOptions)
//! value, or a typed error when a named module cannot be located.

pub mod config;
pub mod error;
pub mod loader;

pub use config::ParserConfig;
pub use error::{Error, Result};
pub use loader::{DEFAULT_PRESET, ParserConfigLoader, preset_module_name};
