//! The Express commit convention: `type(scope): message` headers with a
//! restricted scope alphabet.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-express";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^(\w*)(?:\(([\w$.\-* ]*)\))?: (.*)$")),
        header_correspondence: Some(names(&["type", "scope", "message"])),
        ..ParserOptions::default()
    })
}
