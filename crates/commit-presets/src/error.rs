//! Error types for commit-presets

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested module is unknown to the resolver. This is the sole
    /// not-found signal; every other variant means the module exists but
    /// could not be loaded.
    #[error("Module not found: {name}")]
    ModuleNotFound { name: String },

    #[error("Failed to read module definition at {path}: {message}")]
    DefinitionRead { path: PathBuf, message: String },

    #[error("Invalid module definition at {path}: {message}")]
    InvalidDefinition { path: PathBuf, message: String },
}
