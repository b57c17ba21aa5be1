use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::report::ReportFormat;

/// Runtime configuration threaded through fetching, extraction and
/// report writing.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImportConfig {
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent sent with every fetch
    pub user_agent: String,
    /// Abort the whole run when a fragment lacks its title
    pub strict: bool,
    /// Report format written to the output file
    pub format: ReportFormat,
    /// Print extracted fields and underlying error causes
    pub verbose: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            strict: false,
            format: ReportFormat::default(),
            verbose: false,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("Mozilla/5.0 (compatible; hrecipe-import/{})", env!("CARGO_PKG_VERSION"))
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with HRECIPE__ prefix
    /// 2. hrecipe.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: HRECIPE__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("hrecipe").required(false))
            .add_source(
                Environment::with_prefix("HRECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        settings.try_deserialize()
    }

    /// Fetch timeout; a zero setting is treated as one second.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<ImportConfig, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        ImportConfig::from_settings(settings)
    }

    #[test]
    fn test_default_values() {
        let config = ImportConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(!config.strict);
        assert!(!config.verbose);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = from_toml(
            r#"
            timeout = 5
            strict = true
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
        assert!(config.strict);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = from_toml("timeout = 0").unwrap();
        assert_eq!(config.timeout_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(from_toml(r#"format = "xml""#).is_err());
    }
}
