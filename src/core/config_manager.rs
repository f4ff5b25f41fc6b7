// src/core/config_manager.rs
//! Client configuration: optional TOML file, then environment overrides

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::utils::normalize_base_url;

pub const DEFAULT_CONFIG_FILE: &str = "hr_suite.toml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const ENV_BASE_URL: &str = "HR_SUITE_API_BASE_URL";
const ENV_TIMEOUT: &str = "HR_SUITE_TIMEOUT_SECS";
const ENV_SCREENING_CONTRACT: &str = "HR_SUITE_SCREENING_CONTRACT";
const ENV_SENTIMENT_FIELD: &str = "HR_SUITE_SENTIMENT_FIELD";
const ENV_LOG_FILE: &str = "HR_SUITE_LOG_FILE";

/// Which `/screening` response shape this deployment talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningContract {
    /// `{overallMatchScore (0-100), matchingSkills, missingSkills, ...}`
    #[default]
    Current,
    /// `{match_score (0-1), highlighted_skills, recommendations}`
    Legacy,
}

impl FromStr for ScreeningContract {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "legacy" => Ok(Self::Legacy),
            other => Err(AnalysisError::Configuration(format!(
                "Unknown screening contract '{}'. Use current or legacy",
                other
            ))),
        }
    }
}

/// JSON field name carrying the feedback text on `/sentiment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentField {
    #[default]
    EmployeeFeedback,
    Text,
}

impl SentimentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeFeedback => "employee_feedback",
            Self::Text => "text",
        }
    }
}

impl FromStr for SentimentField {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee_feedback" => Ok(Self::EmployeeFeedback),
            "text" => Ok(Self::Text),
            other => Err(AnalysisError::Configuration(format!(
                "Unknown sentiment field '{}'. Use employee_feedback or text",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub screening_contract: ScreeningContract,
    pub sentiment_field: SentimentField,
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            screening_contract: ScreeningContract::default(),
            sentiment_field: SentimentField::default(),
            log_file: None,
        }
    }

    pub fn with_screening_contract(mut self, contract: ScreeningContract) -> Self {
        self.screening_contract = contract;
        self
    }

    pub fn with_sentiment_field(mut self, field: SentimentField) -> Self {
        self.sentiment_field = field;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// On-disk shape of `hr_suite.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
    screening_contract: Option<ScreeningContract>,
    sentiment_field: Option<SentimentField>,
    log_file: Option<PathBuf>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from the process environment
    pub fn load(config_path: Option<&Path>) -> Result<ClientConfig, AnalysisError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit variable lookup
    pub fn load_with<F>(config_path: Option<&Path>, env: F) -> Result<ClientConfig, AnalysisError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = Self::load_file(config_path)?;

        let base_url = env(ENV_BASE_URL)
            .or(file.base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AnalysisError::Configuration(format!(
                    "{} environment variable not set",
                    ENV_BASE_URL
                ))
            })?;
        let base_url = Self::validate_base_url(&base_url)?;

        let timeout_seconds = match env(ENV_TIMEOUT) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AnalysisError::Configuration(format!(
                    "{} must be a whole number of seconds",
                    ENV_TIMEOUT
                ))
            })?,
            None => file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_seconds == 0 {
            return Err(AnalysisError::Configuration(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        let screening_contract = match env(ENV_SCREENING_CONTRACT) {
            Some(raw) => raw.parse()?,
            None => file.screening_contract.unwrap_or_default(),
        };

        let sentiment_field = match env(ENV_SENTIMENT_FIELD) {
            Some(raw) => raw.parse()?,
            None => file.sentiment_field.unwrap_or_default(),
        };

        let log_file = env(ENV_LOG_FILE).map(PathBuf::from).or(file.log_file);

        Ok(ClientConfig {
            base_url,
            timeout_seconds,
            screening_contract,
            sentiment_field,
            log_file,
        })
    }

    fn load_file(config_path: Option<&Path>) -> Result<ConfigFile, AnalysisError> {
        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(AnalysisError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            AnalysisError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            AnalysisError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn validate_base_url(raw: &str) -> Result<String, AnalysisError> {
        let url = reqwest::Url::parse(raw.trim()).map_err(|e| {
            AnalysisError::Configuration(format!("Invalid base URL '{}': {}", raw, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AnalysisError::Configuration(format!(
                "Base URL must use http or https: {}",
                raw
            )));
        }

        Ok(normalize_base_url(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_base_url_is_configuration_error() {
        let missing = std::env::temp_dir().join("hr_suite_missing_config.toml");
        let err = ConfigManager::load_with(None, env_from(&[])).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Configuration));

        let err = ConfigManager::load_with(Some(&missing), env_from(&[])).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Configuration));
    }

    #[test]
    fn test_env_defaults() {
        let config = ConfigManager::load_with(
            None,
            env_from(&[("HR_SUITE_API_BASE_URL", "http://localhost:8000/")]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.screening_contract, ScreeningContract::Current);
        assert_eq!(config.sentiment_field, SentimentField::EmployeeFeedback);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigManager::load_with(
            None,
            env_from(&[
                ("HR_SUITE_API_BASE_URL", "https://hr.example.com"),
                ("HR_SUITE_TIMEOUT_SECS", "15"),
                ("HR_SUITE_SCREENING_CONTRACT", "legacy"),
                ("HR_SUITE_SENTIMENT_FIELD", "text"),
                ("HR_SUITE_LOG_FILE", "/tmp/hr_suite.log"),
            ]),
        )
        .unwrap();

        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.screening_contract, ScreeningContract::Legacy);
        assert_eq!(config.sentiment_field, SentimentField::Text);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/hr_suite.log")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_url = ConfigManager::load_with(
            None,
            env_from(&[("HR_SUITE_API_BASE_URL", "not a url")]),
        );
        assert!(bad_url.is_err());

        let bad_scheme = ConfigManager::load_with(
            None,
            env_from(&[("HR_SUITE_API_BASE_URL", "ftp://files.example.com")]),
        );
        assert!(bad_scheme.is_err());

        let bad_contract = ConfigManager::load_with(
            None,
            env_from(&[
                ("HR_SUITE_API_BASE_URL", "http://localhost:8000"),
                ("HR_SUITE_SCREENING_CONTRACT", "v3"),
            ]),
        );
        assert!(bad_contract.is_err());

        let zero_timeout = ConfigManager::load_with(
            None,
            env_from(&[
                ("HR_SUITE_API_BASE_URL", "http://localhost:8000"),
                ("HR_SUITE_TIMEOUT_SECS", "0"),
            ]),
        );
        assert!(zero_timeout.is_err());
    }

    #[test]
    fn test_file_then_env_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_url = "http://file-host:9000"
timeout_seconds = 30
screening_contract = "legacy"
sentiment_field = "text"
"#
        )
        .unwrap();

        let from_file = ConfigManager::load_with(Some(file.path()), env_from(&[])).unwrap();
        assert_eq!(from_file.base_url, "http://file-host:9000");
        assert_eq!(from_file.timeout_seconds, 30);
        assert_eq!(from_file.screening_contract, ScreeningContract::Legacy);
        assert_eq!(from_file.sentiment_field, SentimentField::Text);

        let overridden = ConfigManager::load_with(
            Some(file.path()),
            env_from(&[
                ("HR_SUITE_API_BASE_URL", "http://env-host:8000"),
                ("HR_SUITE_SCREENING_CONTRACT", "current"),
            ]),
        )
        .unwrap();
        assert_eq!(overridden.base_url, "http://env-host:8000");
        assert_eq!(overridden.screening_contract, ScreeningContract::Current);
        assert_eq!(overridden.timeout_seconds, 30);
    }
}
