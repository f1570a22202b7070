use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_WINDOW_DAYS: u32 = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: Option<ServiceConfig>,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub window_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub subscriber_id: String,
    pub code_link: String,
    /// Full `Authorization` header value, usually pulled from the
    /// environment via `${VAR}` substitution.
    pub auth_header: String,
    pub timeout_seconds: Option<u64>,
}

impl ProviderConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MatchError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn window_days(&self) -> u32 {
        self.service
            .as_ref()
            .and_then(|s| s.window_days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("provider.endpoint", &self.provider.endpoint)?;
        validate_non_empty_string("provider.subscriber_id", &self.provider.subscriber_id)?;
        validate_non_empty_string("provider.code_link", &self.provider.code_link)?;
        validate_non_empty_string("provider.auth_header", &self.provider.auth_header)?;
        validate_range(
            "provider.timeout_seconds",
            self.provider.timeout_seconds(),
            1,
            120,
        )?;
        validate_range("service.window_days", self.window_days(), 1, 60)?;
        Ok(())
    }
}
