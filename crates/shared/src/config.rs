//! Configuration types for Clientele

use clientele_adapter::SqliteConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

/// Which persistence backend the binary wires into the gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local records, lost on exit
    #[default]
    Memory,
    /// SQLite database through sqlx
    Sqlite,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Sqlite => "sqlite",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(AppError::Config(format!(
                "unknown backend `{other}`; expected memory|sqlite"
            ))),
        }
    }
}

impl core::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseConfig {
    /// sqlx connection URL
    pub url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,
}

/// Defaults come from the adapter so file and driver cannot disagree
impl Default for DatabaseConfig {
    fn default() -> Self {
        let sqlite = SqliteConfig::default();
        Self {
            url: sqlite.url,
            max_connections: sqlite.max_connections,
            acquire_timeout_secs: sqlite.acquire_timeout.as_secs(),
        }
    }
}

/// Application configuration (clientele.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub backend: StoreBackend,

    pub database: DatabaseConfig,

    /// Names inserted into the memory backend at startup
    pub seed: Vec<String>,

    /// Fallback filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database: DatabaseConfig::default(),
            seed: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Read `path` when given, defaults otherwise
    pub fn load(path: Option<&std::path::Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line or environment values on top of the file
    pub fn with_overrides(
        mut self,
        backend: Option<StoreBackend>,
        database_url: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(backend) = backend {
            self.backend = backend;
        }
        if let Some(url) = database_url {
            self.database.url = url;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
