//! The JSHint commit convention: `[[TAG]] short description` headers with
//! `BREAKING CHANGE` notes.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-jshint";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^\[\[(.*)\]\] (.*)$")),
        header_correspondence: Some(names(&["type", "shortDesc"])),
        note_keywords: Some(names(&["BREAKING CHANGE"])),
        ..ParserOptions::default()
    })
}
