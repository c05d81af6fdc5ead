//! Commit-message parser option types.
//!
//! This crate provides the structured directive set that controls how a raw
//! commit message is split into header, body, and footer fields, plus the
//! overlay rules used when several option sources are combined.

pub mod error;
pub mod module;
pub mod options;
pub mod pattern;

pub use error::{Error, Result};
pub use module::{ConventionModule, ModuleBundle};
pub use options::ParserOptions;
pub use pattern::Pattern;
