//! The Angular commit convention.
//!
//! `<type>(<scope>): <subject>` headers, `BREAKING CHANGE` notes, and
//! revert-commit detection.

use commit_opts::{ConventionModule, ParserOptions};

use super::{names, pattern};

pub const MODULE_NAME: &str = "conventional-changelog-angular";

pub fn module() -> ConventionModule {
    ConventionModule::bundle(ParserOptions {
        header_pattern: Some(pattern(r"^(\w*)(?:\((.*)\))?: (.*)$")),
        header_correspondence: Some(names(&["type", "scope", "subject"])),
        note_keywords: Some(names(&["BREAKING CHANGE"])),
        revert_pattern: Some(pattern(
            r#"(?i)^(?:revert|revert:)\s"?([\s\S]+?)"?\s*this reverts commit (\w*)\."#,
        )),
        revert_correspondence: Some(names(&["header", "hash"])),
        ..ParserOptions::default()
    })
}
