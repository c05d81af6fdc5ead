//! Parser option schema and overlay rules.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// The structured directive set controlling how a raw commit message is
/// split into header, body, and footer fields.
///
/// Every field is optional; an absent field means "use the consumer's
/// default", never an invalid state. Serialized names follow the camelCase
/// interchange format that published convention modules use, so a module
/// definition deserializes directly into this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Pattern matching the commit header line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_pattern: Option<Pattern>,
    /// Field names the header pattern's capture groups map to, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_correspondence: Option<Vec<String>>,
    /// Keywords opening a note footer (e.g. `BREAKING CHANGE`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_keywords: Option<Vec<String>>,
    /// Verbs recognized in front of issue references (e.g. `closes`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_actions: Option<Vec<String>>,
    /// Prefixes marking an issue reference (e.g. `#`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_prefixes: Option<Vec<String>>,
    /// Lines starting with this character are dropped before parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_char: Option<char>,
    /// Pattern recognizing merge commits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_pattern: Option<Pattern>,
    /// Field names for the merge pattern's capture groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_correspondence: Option<Vec<String>>,
    /// Pattern recognizing revert commits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_pattern: Option<Pattern>,
    /// Field names for the revert pattern's capture groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_correspondence: Option<Vec<String>>,
    /// Pattern splitting additional fields out of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_pattern: Option<Pattern>,
}

impl ParserOptions {
    /// Overlay `explicit` onto `self`, field by field.
    ///
    /// A field present in `explicit` replaces the base value entirely:
    /// lists are not concatenated and patterns are not re-derived. Fields
    /// absent from `explicit` keep the base value.
    pub fn overlay(self, explicit: ParserOptions) -> ParserOptions {
        ParserOptions {
            header_pattern: explicit.header_pattern.or(self.header_pattern),
            header_correspondence: explicit.header_correspondence.or(self.header_correspondence),
            note_keywords: explicit.note_keywords.or(self.note_keywords),
            reference_actions: explicit.reference_actions.or(self.reference_actions),
            issue_prefixes: explicit.issue_prefixes.or(self.issue_prefixes),
            comment_char: explicit.comment_char.or(self.comment_char),
            merge_pattern: explicit.merge_pattern.or(self.merge_pattern),
            merge_correspondence: explicit.merge_correspondence.or(self.merge_correspondence),
            revert_pattern: explicit.revert_pattern.or(self.revert_pattern),
            revert_correspondence: explicit.revert_correspondence.or(self.revert_correspondence),
            field_pattern: explicit.field_pattern.or(self.field_pattern),
        }
    }

    /// Check whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &ParserOptions::default()
    }
}
