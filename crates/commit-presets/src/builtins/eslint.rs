//! The ESLint commit convention: `Tag: message (refs)` headers.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-eslint";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^(\w*): (.*?)(?:\s*\((.*)\))?$")),
        header_correspondence: Some(names(&["tag", "message"])),
        ..ParserOptions::default()
    })
}
