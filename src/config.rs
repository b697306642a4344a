//! Configuration module
//!
//! Read from `~/.config/smartolt-monitor/config.toml` unless the
//! `SMARTOLT_CONFIG` environment variable points elsewhere. Every key is
//! optional; a missing file yields the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shared::{InfraError, InfraResult};

pub const CONFIG_ENV_VAR: &str = "SMARTOLT_CONFIG";
const APP_DIR: &str = "smartolt-monitor";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub branding: BrandingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    /// Nothing survives a restart
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Defaults to the platform data directory
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs_next::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Delays of the simulated round trips, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub login_delay_ms: u64,
    pub logout_delay_ms: u64,
    pub analysis_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 500,
            logout_delay_ms: 300,
            analysis_delay_ms: 2500,
        }
    }
}

impl SimulationConfig {
    /// No artificial waiting at all; used by tests.
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            logout_delay_ms: 0,
            analysis_delay_ms: 0,
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn logout_delay(&self) -> Duration {
        Duration::from_millis(self.logout_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Initial application name when no settings were persisted yet
    pub app_name: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> InfraResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| InfraError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> InfraResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| InfraError::Config(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// `SMARTOLT_CONFIG` if set, otherwise [`default_config_path`].
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.simulation.login_delay(), Duration::from_millis(500));
        assert_eq!(cfg.storage.backend, StorageBackend::File);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[storage]
backend = "memory"

[simulation]
analysis_delay_ms = 100

[branding]
app_name = "NOC Barat"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.simulation.analysis_delay_ms, 100);
        assert_eq!(cfg.simulation.logout_delay_ms, 300);
        assert_eq!(cfg.branding.app_name.as_deref(), Some("NOC Barat"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[storage\nbackend = ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(InfraError::Config(_))));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.storage.data_dir = Some(tmp.path().join("data"));
        cfg.logging.format = LogFormat::Json;

        cfg.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), cfg);
    }
}
