//! 配置服务
//!
//! `<config_dir>/employee-directory/config.json`, every key optional:
//!
//! ```json
//! {
//!   "base_url": "https://dummy.restapiexample.com/api/v1",
//!   "max_attempts": 5,
//!   "max_retry_delay_secs": 30,
//!   "language": "en-US",
//!   "theme": "dark"
//! }
//! ```
//!
//! Environment variables take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use employee_directory_client::{
    ClientConfig, ENV_BASE_URL, ENV_MAX_ATTEMPTS, ENV_MAX_RETRY_DELAY_SECS,
};
use serde::Deserialize;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// Overrides the configured UI language.
pub const ENV_LANGUAGE: &str = "EMPLOYEE_DIRECTORY_LANG";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub max_attempts: Option<u32>,
    pub max_retry_delay_secs: Option<u64>,
    pub language: Option<String>,
    pub theme: Option<String>,
}

impl AppConfig {
    /// Client settings: defaults, then this file, then `env`.
    pub fn client_config(&self, env: impl Fn(&str) -> Option<String>) -> ClientConfig {
        ClientConfig::default()
            .with_overrides(|key| self.lookup(key))
            .with_overrides(env)
    }

    /// UI language: `env`, then this file, then English.
    pub fn language(&self, env: impl Fn(&str) -> Option<String>) -> Language {
        env(ENV_LANGUAGE)
            .or_else(|| self.language.clone())
            .and_then(|code| {
                let lang = Language::from_code(code.trim());
                if lang.is_none() {
                    log::warn!("Unknown language {code:?}, falling back to English");
                }
                lang
            })
            .unwrap_or_default()
    }

    /// UI theme; unknown names fall back to dark.
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(|name| {
                let theme = Theme::from_name(name);
                if theme.is_none() {
                    log::warn!("Unknown theme {name:?}, falling back to dark");
                }
                theme
            })
            .unwrap_or_default()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            ENV_BASE_URL => self.base_url.clone(),
            ENV_MAX_ATTEMPTS => self.max_attempts.map(|n| n.to_string()),
            ENV_MAX_RETRY_DELAY_SECS => self.max_retry_delay_secs.map(|s| s.to_string()),
            _ => None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/employee-directory/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("employee-directory")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("employee-directory-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn file_values_apply_to_client() {
        let config = AppConfig {
            base_url: Some("http://localhost:9000/api/".into()),
            max_attempts: Some(2),
            max_retry_delay_secs: Some(7),
            ..AppConfig::default()
        };

        let client = config.client_config(no_env);
        assert_eq!(client.base_url, "http://localhost:9000/api");
        assert_eq!(client.retry.max_attempts, 2);
        assert_eq!(client.retry.max_delay, Duration::from_secs(7));
    }

    #[test]
    fn env_overrides_file() {
        let config = AppConfig {
            max_attempts: Some(2),
            ..AppConfig::default()
        };

        let client = config.client_config(|key| (key == ENV_MAX_ATTEMPTS).then(|| "9".to_string()));
        assert_eq!(client.retry.max_attempts, 9);
    }

    #[test]
    fn language_resolution() {
        let config = AppConfig {
            language: Some("zh-CN".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.language(no_env), Language::ZhCn);
        assert_eq!(
            config.language(|key| (key == ENV_LANGUAGE).then(|| "en".to_string())),
            Language::EnUs
        );
        assert_eq!(AppConfig::default().language(no_env), Language::EnUs);

        let unknown = AppConfig {
            language: Some("klingon".into()),
            ..AppConfig::default()
        };
        assert_eq!(unknown.language(no_env), Language::EnUs);
    }

    #[test]
    fn theme_resolution() {
        let light = AppConfig {
            theme: Some("Light".into()),
            ..AppConfig::default()
        };
        assert_eq!(light.theme(), Theme::Light);

        let unknown = AppConfig {
            theme: Some("neon".into()),
            ..AppConfig::default()
        };
        assert_eq!(unknown.theme(), Theme::Dark);
        assert_eq!(AppConfig::default().theme(), Theme::Dark);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = FileConfigService::new(temp_path("missing/config.json"));
        let loaded = service.load();
        assert!(matches!(loaded, Ok(ref c) if *c == AppConfig::default()), "{loaded:?}");
    }

    #[test]
    fn load_reads_file() {
        let path = temp_path("load/config.json");
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let written = std::fs::write(&path, r#"{"base_url":"http://example.test","language":"zh-CN"}"#);
        assert!(written.is_ok(), "{written:?}");

        let loaded = FileConfigService::new(&path).load();
        assert!(
            matches!(loaded, Ok(ref c) if c.base_url.as_deref() == Some("http://example.test")
                && c.language.as_deref() == Some("zh-CN")),
            "{loaded:?}"
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let path = temp_path("invalid/config.json");
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let _ = std::fs::write(&path, "{ not json");

        assert!(FileConfigService::new(&path).load().is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn partial_file_parses() {
        let parsed: AppConfig = serde_json::from_str(r#"{"max_attempts": 3}"#)
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(parsed.max_attempts, Some(3));
        assert_eq!(parsed.base_url, None);
    }
}
