//! Module resolution from definition files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use commit_opts::ConventionModule;

use crate::error::{Error, Result};
use crate::resolver::ModuleResolver;

/// Resolves modules from a directory of TOML definition files.
///
/// `lookup("conventional-changelog-angular")` reads
/// `<dir>/conventional-changelog-angular.toml` and deserializes it as a
/// [`ConventionModule`]. Both the `parserOpts` bundle shape and flat
/// options are accepted:
///
/// ```text
/// definitions/
///   conventional-changelog-angular.toml
///   conventional-changelog-internal.toml
/// ```
#[derive(Debug, Clone)]
pub struct FileResolver {
    dir: PathBuf,
}

impl FileResolver {
    /// Create a resolver reading definitions from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory definitions are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ModuleResolver for FileResolver {
    async fn lookup(&self, name: &str) -> Result<ConventionModule> {
        // Lookups never address outside the definition directory.
        if name.contains(['/', '\\']) {
            return Err(Error::ModuleNotFound {
                name: name.to_string(),
            });
        }

        let path = self.dir.join(format!("{name}.toml"));
        if !path.exists() {
            return Err(Error::ModuleNotFound {
                name: name.to_string(),
            });
        }

        tracing::debug!("Loading module definition from {:?}", path);
        let raw = fs::read_to_string(&path).map_err(|e| Error::DefinitionRead {
            path: path.clone(),
            message: e.to_string(),
        })?;

        toml::from_str(&raw).map_err(|e| Error::InvalidDefinition {
            path,
            message: e.to_string(),
        })
    }
}
