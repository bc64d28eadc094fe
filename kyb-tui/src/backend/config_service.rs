//! Configuration service

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use kyb_core::SessionConfig;
use kyb_provider::RegistryConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const APP_DIR: &str = "kyb-explorer";
const CONFIG_FILE: &str = "config.json";

const ENV_COMPANY_URL: &str = "KYB_COMPANY_URL";
const ENV_BRAND_URL: &str = "KYB_BRAND_URL";
const ENV_API_KEY: &str = "KYB_API_KEY";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: String,
    pub theme: Theme,
    pub company_registry: RegistryConfig,
    pub brand_registry: RegistryConfig,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: Theme::Dark,
            company_registry: RegistryConfig::new("http://127.0.0.1:8080/api/company"),
            brand_registry: RegistryConfig::new("http://127.0.0.1:8080/api/brand"),
            session: SessionConfig::default(),
        }
    }
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    /// Load the configuration
    fn load(&self) -> Result<AppConfig>;

    /// Persist the configuration
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON file in the user's config directory, with environment overrides.
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid {}", self.path.display()))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("cannot write {}", self.path.display()))
    }
}

/// Registry endpoints and the API key can be set from the environment.
///
/// The key applies to both registries.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_COMPANY_URL) {
        config.company_registry.base_url = url;
    }
    if let Some(url) = non_empty(ENV_BRAND_URL) {
        config.brand_registry.base_url = url;
    }
    if let Some(key) = non_empty(ENV_API_KEY) {
        config.company_registry.api_key = Some(key.clone());
        config.brand_registry.api_key = Some(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use kyb_core::types::EmptyRequiredPolicy;

    use super::*;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("kyb-explorer-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = LocalConfigService::with_path(temp_config("absent/config.json"));
        assert_eq!(service.read_file().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_config("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{
                "language": "es-MX",
                "session": { "empty_required_policy": "abort", "lookup_timeout_secs": 5 }
            }"#,
        )
        .unwrap();

        let config = LocalConfigService::with_path(&path).read_file().unwrap();
        assert_eq!(config.language, "es-MX");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.session.empty_required_policy, EmptyRequiredPolicy::Abort);
        assert_eq!(config.session.lookup_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.company_registry, AppConfig::default().company_registry);
    }

    #[test]
    fn broken_file_is_an_error() {
        let path = temp_config("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(LocalConfigService::with_path(&path).read_file().is_err());
    }

    #[test]
    fn save_then_load() {
        let path = temp_config("saved/config.json");
        let service = LocalConfigService::with_path(&path);

        let mut config = AppConfig::default();
        config.theme = Theme::Light;
        config.brand_registry.base_url = "https://brands.example/api".to_string();
        service.save(&config).unwrap();

        assert_eq!(service.read_file().unwrap(), config);
    }

    #[test]
    fn env_overrides() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            ENV_COMPANY_URL => Some("https://companies.example".to_string()),
            ENV_BRAND_URL => Some("   ".to_string()),
            ENV_API_KEY => Some("secret".to_string()),
            _ => None,
        });

        assert_eq!(config.company_registry.base_url, "https://companies.example");
        assert_eq!(
            config.brand_registry.base_url,
            AppConfig::default().brand_registry.base_url
        );
        assert_eq!(config.company_registry.api_key.as_deref(), Some("secret"));
        assert_eq!(config.brand_registry.api_key.as_deref(), Some("secret"));
    }
}
