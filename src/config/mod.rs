#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_pattern_names, validate_positive_number, validate_range, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_MAX_ALLOWED_REQUESTS: usize = 2;
pub const DEFAULT_CONCURRENT_CALLERS: usize = 30;

/// Effective settings after layering: defaults, then the TOML file, then explicit overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub patterns: Vec<String>,
    pub max_allowed_requests: usize,
    pub concurrent_callers: usize,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            max_allowed_requests: DEFAULT_MAX_ALLOWED_REQUESTS,
            concurrent_callers: DEFAULT_CONCURRENT_CALLERS,
            log_level: None,
            json_logs: false,
        }
    }
}

impl From<&TomlConfig> for CatalogConfig {
    fn from(file: &TomlConfig) -> Self {
        Self {
            patterns: file.patterns().to_vec(),
            max_allowed_requests: file.max_allowed_requests(),
            concurrent_callers: file.concurrent_callers(),
            log_level: file.log_level().map(str::to_string),
            json_logs: file.json_logs(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub patterns: Vec<String>,
    pub max_allowed_requests: Option<usize>,
    pub concurrent_callers: Option<usize>,
    pub json_logs: bool,
}

impl CatalogConfig {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if !overrides.patterns.is_empty() {
            self.patterns = overrides.patterns;
        }
        if let Some(max) = overrides.max_allowed_requests {
            self.max_allowed_requests = max;
        }
        if let Some(callers) = overrides.concurrent_callers {
            self.concurrent_callers = callers;
        }
        self.json_logs |= overrides.json_logs;
        self
    }
}

impl ConfigProvider for CatalogConfig {
    fn patterns(&self) -> &[String] {
        &self.patterns
    }

    fn max_allowed_requests(&self) -> usize {
        self.max_allowed_requests
    }

    fn concurrent_callers(&self) -> usize {
        self.concurrent_callers
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_pattern_names("patterns", &self.patterns)?;
        validate_positive_number("max_allowed_requests", self.max_allowed_requests, 1)?;
        validate_range(
            "concurrent_callers",
            self.concurrent_callers,
            1,
            crate::app::patterns::singleton::MAX_CONCURRENT_CALLERS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file() {
        let file = TomlConfig::from_toml_str(
            "[catalog]\npatterns = [\"proxy\"]\n[proxy]\nmax_allowed_requests = 4\n",
        )
        .unwrap();

        let config = CatalogConfig::from(&file).with_overrides(Overrides {
            patterns: vec![],
            max_allowed_requests: Some(7),
            concurrent_callers: None,
            json_logs: false,
        });

        assert_eq!(config.patterns, vec!["proxy"]);
        assert_eq!(config.max_allowed_requests, 7);
        assert_eq!(config.concurrent_callers, DEFAULT_CONCURRENT_CALLERS);
    }

    #[test]
    fn test_override_patterns_replace_file_patterns() {
        let file = TomlConfig::from_toml_str("[catalog]\npatterns = [\"proxy\"]\n").unwrap();
        let config = CatalogConfig::from(&file).with_overrides(Overrides {
            patterns: vec!["visitor".to_string()],
            ..Overrides::default()
        });
        assert_eq!(config.patterns, vec!["visitor"]);
    }

    #[test]
    fn test_validation_rejects_out_of_range_callers() {
        let config = CatalogConfig {
            concurrent_callers: 0,
            ..CatalogConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(CatalogConfig::default().validate().is_ok());
    }
}
