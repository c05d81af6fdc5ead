//! The Ember commit convention: `[TAG channel] subject` headers.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-ember";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^\[(.*) (.*)\] (.*)$")),
        header_correspondence: Some(names(&["tag", "taggedAs", "subject"])),
        ..ParserOptions::default()
    })
}
