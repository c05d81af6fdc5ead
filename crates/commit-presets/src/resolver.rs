//! ModuleResolver trait

use async_trait::async_trait;
use commit_opts::ConventionModule;

use crate::error::Result;

/// Name-to-module lookup used during parser-configuration resolution.
///
/// Implementations may serve modules from an in-memory registry, from
/// definition files on disk, or any other backing store. Lookup is async
/// because loading a module may be I/O-bound.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    /// Look up a convention module by name.
    ///
    /// Returns [`Error::ModuleNotFound`](crate::Error::ModuleNotFound) when
    /// the name is unknown to this resolver. Any other error means the
    /// module exists but could not be loaded.
    async fn lookup(&self, name: &str) -> Result<ConventionModule>;
}
