use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Upstream request timeout when `UPSTREAM_TIMEOUT_SECS` is not set.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub anthropic: AnthropicConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: Secret<String>,
    pub model: String,
    /// Origin of the Messages API; overridden in tests.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AnthropicConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env = |key: &str, default: Option<&str>| -> Result<String, AppError> {
            match lookup(key).filter(|v| !v.is_empty()) {
                Some(val) => Ok(val),
                None => default.map(str::to_string).ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
                }),
            }
        };

        let timeout_secs = get_env(
            "UPSTREAM_TIMEOUT_SECS",
            Some(&DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string()),
        )?
        .parse::<u64>()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS: {}", e)))?;

        Ok(RelayConfig {
            common,
            anthropic: AnthropicConfig {
                api_key: Secret::new(get_env("ANTHROPIC_API_KEY", None)?),
                model: get_env("MODEL", Some(DEFAULT_MODEL))?,
                base_url: get_env("ANTHROPIC_BASE_URL", Some(DEFAULT_ANTHROPIC_BASE_URL))?,
                timeout_secs,
            },
        })
    }
}
