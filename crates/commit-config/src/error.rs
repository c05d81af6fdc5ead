//! Error types for commit-config

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named preset (including the implicit default) could not be located.
    #[error("Preset: {identifier:?} does not exist")]
    PresetNotFound { identifier: String },

    /// A named config module could not be located.
    #[error("Config: {identifier:?} does not exist")]
    ConfigNotFound { identifier: String },

    /// Unexpected failure surfaced by the module resolver, passed through
    /// unmodified. Built only by explicit match in the loader, never via
    /// `#[from]`.
    #[error(transparent)]
    Module(commit_presets::Error),
}

impl Error {
    /// Stable machine-readable code for pipeline consumers.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::PresetNotFound { .. } | Error::ConfigNotFound { .. } => {
                Some("MODULE_NOT_FOUND")
            }
            Error::Module(_) => None,
        }
    }

    /// The request field that named the missing module.
    pub fn subject(&self) -> Option<&'static str> {
        match self {
            Error::PresetNotFound { .. } => Some("preset"),
            Error::ConfigNotFound { .. } => Some("config"),
            Error::Module(_) => None,
        }
    }

    /// The identifier that failed to resolve.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Error::PresetNotFound { identifier } | Error::ConfigNotFound { identifier } => {
                Some(identifier)
            }
            Error::Module(_) => None,
        }
    }
}
