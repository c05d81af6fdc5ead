//! Loadable convention module shapes.

use serde::{Deserialize, Serialize};

use crate::options::ParserOptions;

/// A module exposing its parser options under a `parserOpts` key.
///
/// This is the common published shape; the module may carry further
/// sections (writer options and the like) that this crate ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleBundle {
    pub parser_opts: ParserOptions,
}

/// What a module lookup returns.
///
/// Published convention modules usually expose a `parserOpts` sub-object;
/// some expose the options directly. Both shapes are accepted, and the
/// bundle shape wins when both could apply because its required key
/// disambiguates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConventionModule {
    Bundle(ModuleBundle),
    Options(ParserOptions),
}

impl ConventionModule {
    /// Build a module in the published bundle shape.
    pub fn bundle(parser_opts: ParserOptions) -> Self {
        ConventionModule::Bundle(ModuleBundle { parser_opts })
    }

    /// The parser options this module supplies.
    pub fn parser_opts(&self) -> &ParserOptions {
        match self {
            ConventionModule::Bundle(bundle) => &bundle.parser_opts,
            ConventionModule::Options(opts) => opts,
        }
    }

    /// Consume the module, keeping only its parser options.
    pub fn into_parser_opts(self) -> ParserOptions {
        match self {
            ConventionModule::Bundle(bundle) => bundle.parser_opts,
            ConventionModule::Options(opts) => opts,
        }
    }
}

impl From<ParserOptions> for ConventionModule {
    fn from(opts: ParserOptions) -> Self {
        ConventionModule::Options(opts)
    }
}
