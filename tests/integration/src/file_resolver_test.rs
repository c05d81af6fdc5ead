//! End-to-end resolution through on-disk module definitions.

use std::path::PathBuf;

use commit_config::{Error, ParserConfig, ParserConfigLoader};
use commit_opts::{ParserOptions, Pattern};
use commit_presets::FileResolver;
use pretty_assertions::assert_eq;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/modules")
}

fn loader() -> ParserConfigLoader<FileResolver> {
    ParserConfigLoader::new(FileResolver::new(fixtures_dir()))
}

#[tokio::test]
async fn test_config_from_bundle_definition() {
    let request = ParserConfig::default().with_config("conventional-changelog-internal");
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(
        resolved.header_pattern.as_ref().map(|p| p.as_str()),
        Some(r"^(\w*)/(\w*): (.*)$")
    );
    assert_eq!(
        resolved.header_correspondence,
        Some(vec![
            "team".to_string(),
            "type".to_string(),
            "subject".to_string()
        ])
    );
    assert_eq!(resolved.note_keywords, Some(vec!["BREAKING".to_string()]));
    assert_eq!(resolved.issue_prefixes, Some(vec!["#".to_string()]));
}

#[tokio::test]
async fn test_config_from_flat_definition() {
    let request = ParserConfig::default().with_config("team-flat");
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(
        resolved.header_pattern.as_ref().map(|p| p.as_str()),
        Some(r"^\[(.*)\] (.*)$")
    );
    assert_eq!(resolved.comment_char, Some(';'));
    assert!(resolved.note_keywords.is_none());
}

#[tokio::test]
async fn test_preset_resolution_through_files() {
    // Presets expand to canonical names before lookup, so the internal
    // convention is addressable as a preset too.
    let request = ParserConfig::default().with_preset("Internal");
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(
        resolved.header_correspondence,
        Some(vec![
            "team".to_string(),
            "type".to_string(),
            "subject".to_string()
        ])
    );
}

#[tokio::test]
async fn test_explicit_overrides_overlay_a_file_config() {
    let overrides = ParserOptions {
        note_keywords: Some(vec!["BREAKING-CHANGE".to_string()]),
        ..ParserOptions::default()
    };
    let request = ParserConfig::default()
        .with_config("conventional-changelog-internal")
        .with_parser_opts(overrides);

    let resolved = loader().load(&request).await.unwrap();
    assert_eq!(
        resolved.note_keywords,
        Some(vec!["BREAKING-CHANGE".to_string()])
    );
    // The rest of the file's options survive the overlay.
    assert_eq!(
        resolved.header_pattern,
        Some(Pattern::new(r"^(\w*)/(\w*): (.*)$").unwrap())
    );
}

#[tokio::test]
async fn test_missing_definition_maps_to_config_not_found() {
    let request = ParserConfig::default().with_config("no-such-module");
    let err = loader().load(&request).await.unwrap_err();

    assert!(matches!(
        &err,
        Error::ConfigNotFound { identifier } if identifier == "no-such-module"
    ));
    assert_eq!(err.code(), Some("MODULE_NOT_FOUND"));
}
