// src/core/config_manager.rs
//! Configuration: optional config.yaml (local/production sections) plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::gemini_client::DEFAULT_TIMEOUT_SECS;
use crate::utils::resolve_path;

pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ABOUT_ME: &str =
    "Hi! This is the portfolio chat assistant. Ask me anything about my work.";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub profile_path: PathBuf,
    pub frontend_origin: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub log_file: Option<PathBuf>,
    pub about_me: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from("data/profile.json"),
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            port: DEFAULT_PORT,
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_file: None,
            about_me: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct ProviderConfig {
    pub api_key: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &if self.is_configured() { "***" } else { "" })
            .finish()
    }
}

impl ProviderConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    local: Option<EnvironmentConfig>,
    production: Option<EnvironmentConfig>,
}

impl ConfigManager {
    /// Load configuration for the current ENVIRONMENT from `config_path`
    /// (if present) and the process env
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_yaml(&content, &environment)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            info!(
                "No configuration file at {}, using defaults",
                config_path.display()
            );
            Self::default_config()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.environment.profile_path = resolve_path(&config.environment.profile_path)?;
        if let Some(log_file) = &config.environment.log_file {
            config.environment.log_file = Some(resolve_path(log_file)?);
        }

        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    }

    pub fn default_config() -> Self {
        Self {
            environment: EnvironmentConfig::default(),
            provider: ProviderConfig::default(),
        }
    }

    /// Pick the section matching `environment` out of a config.yaml document
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid YAML configuration")?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(Self {
            environment: section.unwrap_or_default(),
            provider: ProviderConfig::default(),
        })
    }

    /// Environment variables win over the file; the API key only ever comes from here
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.provider.api_key = key;
        }
        if let Some(origin) = lookup("FRONTEND_ORIGIN") {
            self.environment.frontend_origin = origin;
        }
        if let Some(path) = lookup("PROFILE_PATH") {
            self.environment.profile_path = PathBuf::from(path);
        }
        if let Some(port) = lookup("ROCKET_PORT") {
            self.environment.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        Ok(())
    }

    pub fn about_me(&self) -> &str {
        self.environment
            .about_me
            .as_deref()
            .unwrap_or(DEFAULT_ABOUT_ME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const YAML: &str = r#"
local:
  profile_path: data/profile.json
  frontend_origin: http://localhost:5173
  request_timeout_seconds: 10
production:
  profile_path: /app/profile.json
  frontend_origin: https://portfolio.example.com
  port: 9000
  about_me: "Hi, I'm Ada!"
  unknown_key: ignored
"#;

    #[test]
    fn test_selects_environment_section() {
        let local = ConfigManager::from_yaml(YAML, "local").unwrap();
        assert_eq!(local.environment.request_timeout_seconds, 10);
        assert_eq!(local.environment.port, DEFAULT_PORT);
        assert_eq!(local.about_me(), DEFAULT_ABOUT_ME);

        let prod = ConfigManager::from_yaml(YAML, "production").unwrap();
        assert_eq!(
            prod.environment.profile_path,
            PathBuf::from("/app/profile.json")
        );
        assert_eq!(
            prod.environment.frontend_origin,
            "https://portfolio.example.com"
        );
        assert_eq!(prod.environment.port, 9000);
        assert_eq!(prod.about_me(), "Hi, I'm Ada!");
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = ConfigManager::from_yaml("local:\n  port: 7000\n", "production").unwrap();
        assert_eq!(config.environment, EnvironmentConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        assert!(ConfigManager::from_yaml("local: [", "local").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "secret-key"),
            ("FRONTEND_ORIGIN", "https://me.dev"),
            ("ROCKET_PORT", "8181"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigManager::default_config();
        assert!(!config.provider.is_configured());

        config
            .apply_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert!(config.provider.is_configured());
        assert_eq!(config.environment.frontend_origin, "https://me.dev");
        assert_eq!(config.environment.port, 8181);
        assert!(!format!("{:?}", config).contains("secret-key"));
    }

    #[test]
    fn test_bad_port_override_fails() {
        let mut config = ConfigManager::default_config();
        let result = config.apply_overrides(|k| (k == "ROCKET_PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }
}
