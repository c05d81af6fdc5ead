//! The Atom commit convention: `:emoji: short description` headers.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-atom";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^(:.*?:) (.*)$")),
        header_correspondence: Some(names(&["emoji", "shortDesc"])),
        ..ParserOptions::default()
    })
}
