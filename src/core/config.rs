//! Application configuration management

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where document slices are stored (defaults to the platform data dir)
    pub storage_dir: Option<PathBuf>,
    /// How long "Saved locally" stays visible, in milliseconds
    pub status_duration_ms: u64,
    /// UI settings
    pub ui: UiConfig,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            status_duration_ms: 2000,
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            window_width: 1100.0,
            window_height: 900.0,
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "octaship", "ShipDocs")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Directory holding the saved document slices
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("documents")))
    }

    /// Directory for rendered print pages
    pub fn print_dir(&self) -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.cache_dir().join("print"))
            .unwrap_or_else(|| std::env::temp_dir().join("shipdocs"))
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_duration_ms)
    }

    pub fn dark_theme(&self) -> bool {
        self.ui.theme.eq_ignore_ascii_case("dark")
    }

    pub fn set_dark_theme(&mut self, dark: bool) {
        self.ui.theme = if dark { "dark" } else { "light" }.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"ui":{"theme":"dark"}}"#).unwrap();
        assert!(config.dark_theme());
        assert_eq!(config.status_duration(), Duration::from_secs(2));
        assert_eq!(config.ui.window_width, 1100.0);
    }

    #[test]
    fn test_storage_dir_override() {
        let config = AppConfig {
            storage_dir: Some(PathBuf::from("/tmp/shipdocs-test")),
            ..AppConfig::default()
        };
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/tmp/shipdocs-test")));
    }
}
