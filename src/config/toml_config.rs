use crate::config::{DEFAULT_CONCURRENT_CALLERS, DEFAULT_MAX_ALLOWED_REQUESTS};
use crate::core::ConfigProvider;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_pattern_names, validate_positive_number, validate_range,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    pub proxy: Option<ProxySection>,
    pub singleton: Option<SingletonSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: Option<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxySection {
    pub max_allowed_requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingletonSection {
    pub concurrent_callers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PatternError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PatternError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn name(&self) -> Option<&str> {
        self.catalog.name.as_deref()
    }

    pub fn max_allowed_requests_override(&self) -> Option<usize> {
        self.proxy.as_ref().and_then(|p| p.max_allowed_requests)
    }

    pub fn concurrent_callers_override(&self) -> Option<usize> {
        self.singleton.as_ref().and_then(|s| s.concurrent_callers)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = &self.catalog.name {
            validate_non_empty_string("catalog.name", name)?;
        }

        validate_pattern_names("catalog.patterns", &self.catalog.patterns)?;

        if let Some(max) = self.max_allowed_requests_override() {
            validate_positive_number("proxy.max_allowed_requests", max, 1)?;
        }

        if let Some(callers) = self.concurrent_callers_override() {
            validate_range(
                "singleton.concurrent_callers",
                callers,
                1,
                crate::app::patterns::singleton::MAX_CONCURRENT_CALLERS,
            )?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(PatternError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn patterns(&self) -> &[String] {
        &self.catalog.patterns
    }

    fn max_allowed_requests(&self) -> usize {
        self.max_allowed_requests_override()
            .unwrap_or(DEFAULT_MAX_ALLOWED_REQUESTS)
    }

    fn concurrent_callers(&self) -> usize {
        self.concurrent_callers_override()
            .unwrap_or(DEFAULT_CONCURRENT_CALLERS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
name = "design patterns"
patterns = ["proxy", "memento"]

[proxy]
max_allowed_requests = 3

[singleton]
concurrent_callers = 12

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), Some("design patterns"));
        assert_eq!(config.patterns(), ["proxy", "memento"]);
        assert_eq!(config.max_allowed_requests(), 3);
        assert_eq!(config.concurrent_callers(), 12);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.patterns().is_empty());
        assert_eq!(config.max_allowed_requests(), DEFAULT_MAX_ALLOWED_REQUESTS);
        assert_eq!(config.concurrent_callers(), DEFAULT_CONCURRENT_CALLERS);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PATTERN_CATALOG_TEST_LIMIT", "5");

        let toml_content = r#"
[proxy]
max_allowed_requests = ${PATTERN_CATALOG_TEST_LIMIT}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.max_allowed_requests(), 5);

        std::env::remove_var("PATTERN_CATALOG_TEST_LIMIT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let substituted = TomlConfig::substitute_env_vars("name = \"${PATTERN_CATALOG_SURELY_UNSET}\"");
        assert_eq!(substituted, "name = \"${PATTERN_CATALOG_SURELY_UNSET}\"");
    }

    #[test]
    fn test_config_validation() {
        let unknown_pattern = TomlConfig::from_toml_str("[catalog]\npatterns = [\"bridge\"]\n").unwrap();
        assert!(unknown_pattern.validate().is_err());

        let zero_limit = TomlConfig::from_toml_str("[proxy]\nmax_allowed_requests = 0\n").unwrap();
        assert!(zero_limit.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[bridge]\nenabled = true\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[catalog]
name = "file-test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), Some("file-test"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PatternError::IoError(_)));
    }
}
