//! Resolution of a parser-configuration selection into merged options.

use commit_opts::ParserOptions;
use commit_presets::ModuleResolver;

use crate::config::ParserConfig;
use crate::error::{Error, Result};

/// Preset applied when the request selects nothing at all.
pub const DEFAULT_PRESET: &str = "angular";

/// Expand a preset identifier to its canonical module name.
///
/// Presets are published as `conventional-changelog-{name}` modules; the
/// identifier is lowercased before expansion. Config identifiers are full
/// module names already and are never expanded.
pub fn preset_module_name(preset: &str) -> String {
    format!("conventional-changelog-{}", preset.to_lowercase())
}

/// Resolves a [`ParserConfig`] into a single merged [`ParserOptions`] value.
///
/// Precedence, highest first: explicit `parser_opts` fields, then the
/// `config` module, then the `preset` module. A request with no selection
/// at all falls back to [`DEFAULT_PRESET`]; explicit options alone are
/// layered onto an empty base.
///
/// Resolution is a pure function of the request and the resolver state:
/// repeat calls with an identical request against an unchanged resolver
/// yield identical results.
pub struct ParserConfigLoader<R> {
    resolver: R,
}

impl<R: ModuleResolver> ParserConfigLoader<R> {
    /// Create a loader resolving module names through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolve `config` into merged parser options.
    ///
    /// Fails with [`Error::ConfigNotFound`] / [`Error::PresetNotFound`] when
    /// the named module cannot be located; a missing name is terminal, never
    /// downgraded to a default. Any other resolver failure propagates
    /// unmodified.
    pub async fn load(&self, config: &ParserConfig) -> Result<ParserOptions> {
        let base = self.load_base(config).await?;
        Ok(match config.parser_opts.clone() {
            Some(explicit) => base.overlay(explicit),
            None => base,
        })
    }

    async fn load_base(&self, config: &ParserConfig) -> Result<ParserOptions> {
        // A config module is more specific than a preset and wins when both
        // are supplied.
        if let Some(name) = config.config.as_deref() {
            return self
                .lookup(name, || Error::ConfigNotFound {
                    identifier: name.to_string(),
                })
                .await;
        }

        if let Some(preset) = config.preset.as_deref() {
            let module_name = preset_module_name(preset);
            return self
                .lookup(&module_name, || Error::PresetNotFound {
                    identifier: preset.to_string(),
                })
                .await;
        }

        if config.parser_opts.is_none() {
            // Nothing selected at all: act as if the default preset had been
            // requested. A failure here means the wired resolver lacks the
            // default module, and surfaces like any missing preset.
            let module_name = preset_module_name(DEFAULT_PRESET);
            return self
                .lookup(&module_name, || Error::PresetNotFound {
                    identifier: DEFAULT_PRESET.to_string(),
                })
                .await;
        }

        // Explicit options alone: empty base, secondary fields stay unset
        // unless the caller set them.
        Ok(ParserOptions::default())
    }

    async fn lookup(
        &self,
        module_name: &str,
        not_found: impl FnOnce() -> Error,
    ) -> Result<ParserOptions> {
        tracing::debug!("Resolving parser options from module {:?}", module_name);
        match self.resolver.lookup(module_name).await {
            Ok(module) => Ok(module.into_parser_opts()),
            Err(commit_presets::Error::ModuleNotFound { .. }) => Err(not_found()),
            Err(other) => Err(Error::Module(other)),
        }
    }
}
