use pattern_catalog::config::toml_config::TomlConfig;
use pattern_catalog::utils::validation::Validate;
use pattern_catalog::{CatalogConfig, CatalogEngine, PatternError, PatternKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_engine_runs_patterns_listed_in_file() {
    let file = write_config(
        r#"
[catalog]
name = "structural"
patterns = ["adapter", "visitor", "builder"]
"#,
    );

    let toml_config = TomlConfig::from_file(file.path()).unwrap();
    toml_config.validate().unwrap();

    let engine = CatalogEngine::from_config(&toml_config).unwrap();
    assert_eq!(
        engine.kinds(),
        vec![PatternKind::Adapter, PatternKind::Visitor, PatternKind::Builder]
    );

    let transcripts = engine.run().await.unwrap();
    assert!(transcripts[1].contains("Total area: 20314.16"));
}

#[test]
fn test_file_settings_flow_into_catalog_config() {
    let file = write_config(
        r#"
[proxy]
max_allowed_requests = 5

[singleton]
concurrent_callers = 8

[logging]
level = "warn"
json = true
"#,
    );

    let toml_config = TomlConfig::from_file(file.path()).unwrap();
    let config = CatalogConfig::from(&toml_config);

    assert!(config.patterns.is_empty());
    assert_eq!(config.max_allowed_requests, 5);
    assert_eq!(config.concurrent_callers, 8);
    assert_eq!(config.log_level.as_deref(), Some("warn"));
    assert!(config.json_logs);
}

#[test]
fn test_duplicate_patterns_fail_validation() {
    let file = write_config("[catalog]\npatterns = [\"proxy\", \"Proxy\"]\n");
    let toml_config = TomlConfig::from_file(file.path()).unwrap();

    let err = toml_config.validate().unwrap_err();
    assert!(matches!(err, PatternError::InvalidConfigValueError { .. }));
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = write_config("[catalog\npatterns = ");
    assert!(TomlConfig::from_file(file.path()).is_err());
}
