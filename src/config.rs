use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7575,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Which data source backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Files,
    Database,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Files => write!(f, "files"),
            SourceMode::Database => write!(f, "database"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub mode: SourceMode,

    /// Root of the per-collection content directories (files mode).
    pub content_path: String,

    /// Connection URL for the relational mirror (database mode). Credentials
    /// travel inside the URL. Overridable via `VODARR_DATABASE_URL`.
    pub database_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Files,
            content_path: "./content".to_string(),
            database_url: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VODARR_DATABASE_URL") {
            self.source.database_url = url;
        }
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("vodarr").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vodarr").join("config.toml"));
        }

        paths
    }

    /// Startup validation. A database deployment without a connection URL is
    /// a hard configuration error; there is no degraded mode.
    pub fn validate(&self) -> Result<()> {
        match self.source.mode {
            SourceMode::Database => {
                if self.source.database_url.is_empty() {
                    anyhow::bail!(
                        "Database URL must be set (config [source].database_url or VODARR_DATABASE_URL) when the database source is selected"
                    );
                }
            }
            SourceMode::Files => {
                if self.source.content_path.is_empty() {
                    anyhow::bail!("Content path cannot be empty when the files source is selected");
                }
            }
        }

        Ok(())
    }
}
