use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub donations: DonationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend; not served when missing
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DonationsConfig {
    /// Monthly goal in rupees
    #[serde(default = "default_monthly_target")]
    pub monthly_target: i64,
    /// Recent donors returned when the client gives no limit
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u64,
}

impl Default for DonationsConfig {
    fn default() -> Self {
        Self {
            monthly_target: default_monthly_target(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_monthly_target() -> i64 {
    contracts::domain::a003_donation::aggregate::DEFAULT_MONTHLY_TARGET
}

fn default_recent_limit() -> u64 {
    3
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000

[donations]
monthly_target = 100000
recent_limit = 3
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Store the loaded configuration for handlers
pub fn install(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration already installed"))
}

/// Installed configuration, or the embedded default when none was installed
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_else(|| {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid TOML")
    })
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_near_exe(&config.database.path)
}

/// Get the static frontend directory, if configured
pub fn get_static_dir(config: &Config) -> Option<PathBuf> {
    config.server.static_dir.as_deref().map(resolve_near_exe)
}

fn resolve_near_exe(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.donations.monthly_target, 100_000);
        assert_eq!(config.donations.recent_limit, 3);
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.static_dir.is_none());
        assert_eq!(config.donations.monthly_target, 100_000);
    }

    #[test]
    fn test_absolute_database_path_is_kept() {
        let config: Config = toml::from_str("[database]\npath = \"/var/lib/app.db\"\n").unwrap();
        assert_eq!(get_database_path(&config), PathBuf::from("/var/lib/app.db"));
    }
}
