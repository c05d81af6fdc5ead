//! Caller-supplied parser-configuration selection.

use commit_opts::ParserOptions;
use serde::{Deserialize, Serialize};

/// The parser-options selection from a release configuration block.
///
/// Any subset of the three fields may be present; the all-absent request is
/// valid and resolves to the default preset. Serialized names follow the
/// camelCase convention of the surrounding release configuration, so a
/// block like `{ "preset": "angular", "parserOpts": { ... } }` deserializes
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Published convention name, expanded to its canonical module name
    /// before lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Full module name, looked up as-is. Takes precedence over `preset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Explicit overrides, overlaid field by field onto the resolved base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_opts: Option<ParserOptions>,
}

impl ParserConfig {
    /// Select a preset by name.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Select a config module by name.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Supply explicit parser option overrides.
    pub fn with_parser_opts(mut self, parser_opts: ParserOptions) -> Self {
        self.parser_opts = Some(parser_opts);
        self
    }
}
