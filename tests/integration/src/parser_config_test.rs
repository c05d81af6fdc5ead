//! End-to-end parser-configuration resolution against the built-in
//! conventions: every preset and config path, explicit overrides, and the
//! error surface a release pipeline depends on.

use commit_config::{DEFAULT_PRESET, Error, ParserConfig, ParserConfigLoader, preset_module_name};
use commit_opts::{ParserOptions, Pattern};
use commit_presets::ModuleRegistry;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn loader() -> ParserConfigLoader<ModuleRegistry> {
    ParserConfigLoader::new(ModuleRegistry::with_builtins())
}

fn custom_parser_opts() -> ParserOptions {
    ParserOptions {
        header_pattern: Some(Pattern::new(r"^##(.*?)## (.*)$").unwrap()),
        header_correspondence: Some(vec!["tag".to_string(), "shortDesc".to_string()]),
        ..ParserOptions::default()
    }
}

#[tokio::test]
async fn test_empty_request_loads_default_preset() {
    let resolved = loader().load(&ParserConfig::default()).await.unwrap();

    let registry = ModuleRegistry::with_builtins();
    let expected = registry
        .get(&preset_module_name(DEFAULT_PRESET))
        .unwrap()
        .parser_opts()
        .clone();
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn test_explicit_parser_opts_alone() {
    let request = ParserConfig::default().with_parser_opts(custom_parser_opts());
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(resolved.header_pattern, custom_parser_opts().header_pattern);
    assert_eq!(
        resolved.header_correspondence,
        custom_parser_opts().header_correspondence
    );
    // No base was merged in: secondary fields stay unset.
    assert!(resolved.note_keywords.is_none());
}

#[tokio::test]
async fn test_partial_parser_opts_overlay_a_preset() {
    let request = ParserConfig::default()
        .with_preset("angular")
        .with_parser_opts(custom_parser_opts());
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(resolved.header_pattern, custom_parser_opts().header_pattern);
    assert_eq!(
        resolved.header_correspondence,
        custom_parser_opts().header_correspondence
    );
    // Fields the override left alone come from the preset.
    assert_eq!(
        resolved.note_keywords,
        Some(vec!["BREAKING CHANGE".to_string()])
    );
}

#[tokio::test]
async fn test_partial_parser_opts_overlay_a_config() {
    let request = ParserConfig::default()
        .with_config("conventional-changelog-angular")
        .with_parser_opts(custom_parser_opts());
    let resolved = loader().load(&request).await.unwrap();

    assert_eq!(resolved.header_pattern, custom_parser_opts().header_pattern);
    assert_eq!(
        resolved.header_correspondence,
        custom_parser_opts().header_correspondence
    );
    assert_eq!(
        resolved.note_keywords,
        Some(vec!["BREAKING CHANGE".to_string()])
    );
}

#[rstest]
#[case("angular")]
#[case("atom")]
#[case("ember")]
#[case("eslint")]
#[case("express")]
#[case("jshint")]
#[tokio::test]
async fn test_load_preset(#[case] preset: &str) {
    let request = ParserConfig::default().with_preset(preset);
    let resolved = loader().load(&request).await.unwrap();
    assert!(resolved.header_pattern.is_some());

    // The preset path yields exactly the module's parser options.
    let registry = ModuleRegistry::with_builtins();
    let expected = registry
        .get(&preset_module_name(preset))
        .unwrap()
        .parser_opts()
        .clone();
    assert_eq!(resolved, expected);
}

#[rstest]
#[case("conventional-changelog-angular")]
#[case("conventional-changelog-atom")]
#[case("conventional-changelog-ember")]
#[case("conventional-changelog-eslint")]
#[case("conventional-changelog-express")]
#[case("conventional-changelog-jshint")]
#[tokio::test]
async fn test_load_config(#[case] config: &str) {
    let request = ParserConfig::default().with_config(config);
    let resolved = loader().load(&request).await.unwrap();
    assert!(resolved.header_pattern.is_some());

    let registry = ModuleRegistry::with_builtins();
    let expected = registry.get(config).unwrap().parser_opts().clone();
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn test_unknown_config_is_terminal() {
    let request = ParserConfig::default().with_config("unknown-config");
    let err = loader().load(&request).await.unwrap_err();

    assert!(matches!(
        &err,
        Error::ConfigNotFound { identifier } if identifier == "unknown-config"
    ));
    assert_eq!(err.code(), Some("MODULE_NOT_FOUND"));
    assert_eq!(err.subject(), Some("config"));
    assert_eq!(err.to_string(), r#"Config: "unknown-config" does not exist"#);
}

#[tokio::test]
async fn test_unknown_preset_is_terminal() {
    let request = ParserConfig::default().with_preset("unknown-preset");
    let err = loader().load(&request).await.unwrap_err();

    assert!(matches!(
        &err,
        Error::PresetNotFound { identifier } if identifier == "unknown-preset"
    ));
    assert_eq!(err.code(), Some("MODULE_NOT_FOUND"));
    assert_eq!(err.subject(), Some("preset"));
    assert_eq!(err.to_string(), r#"Preset: "unknown-preset" does not exist"#);
}

#[tokio::test]
async fn test_repeat_resolution_is_deep_equal() {
    let loader = loader();
    let request = ParserConfig::default()
        .with_preset("angular")
        .with_parser_opts(custom_parser_opts());

    let first = loader.load(&request).await.unwrap();
    let second = loader.load(&request).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_resolved_options_drive_a_consumer() {
    // The resolved value is what a commit tokenizer receives; check the
    // angular default actually splits a header.
    let resolved = loader().load(&ParserConfig::default()).await.unwrap();

    let header = resolved.header_pattern.unwrap();
    let caps = header.captures("fix(release): pin the parser version").unwrap();
    let fields = resolved.header_correspondence.unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(&caps[1], "fix");
    assert_eq!(&caps[2], "release");
    assert_eq!(&caps[3], "pin the parser version");
}
