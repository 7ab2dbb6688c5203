use crate::config::toml_config::TomlConfig;
use crate::config::{CatalogConfig, Overrides};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-catalog")]
#[command(about = "Runs small demos of classic design patterns")]
pub struct CliConfig {
    /// Patterns to run, comma separated (default: all)
    #[arg(short, long, value_delimiter = ',')]
    pub pattern: Vec<String>,

    /// List the available patterns and exit
    #[arg(long)]
    pub list: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Requests per URL the proxy forwards before answering 403
    #[arg(long)]
    pub max_allowed_requests: Option<usize>,

    /// Tasks racing for the singleton
    #[arg(long)]
    pub concurrent_callers: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies the flags on top.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let base = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                CatalogConfig::from(&file)
            }
            None => CatalogConfig::default(),
        };

        let config = base.with_overrides(Overrides {
            patterns: self.pattern.clone(),
            max_allowed_requests: self.max_allowed_requests,
            concurrent_callers: self.concurrent_callers,
            json_logs: self.json_logs,
        });
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "pattern-catalog",
            "--pattern",
            "proxy,memento",
            "--max-allowed-requests",
            "3",
            "-v",
        ]);
        assert_eq!(cli.pattern, vec!["proxy", "memento"]);
        assert_eq!(cli.max_allowed_requests, Some(3));
        assert!(cli.verbose);

        let config = cli.resolve().unwrap();
        assert_eq!(config.max_allowed_requests, 3);
        assert_eq!(config.concurrent_callers, crate::config::DEFAULT_CONCURRENT_CALLERS);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[singleton]\nconcurrent_callers = 4\n[proxy]\nmax_allowed_requests = 9\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["pattern-catalog", "--config", &path, "--concurrent-callers", "6"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.concurrent_callers, 6);
        assert_eq!(config.max_allowed_requests, 9);
    }

    #[test]
    fn test_unknown_pattern_flag_fails_resolution() {
        let cli = CliConfig::parse_from(["pattern-catalog", "--pattern", "bridge"]);
        assert!(cli.resolve().is_err());
    }
}
