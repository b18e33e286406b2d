use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Keys a complete configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 5] = [
    "database",
    "default_start_time",
    "default_end_time",
    "recent_sessions",
    "default_period",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_start_time")]
    pub default_start_time: String,
    #[serde(default = "default_end_time")]
    pub default_end_time: String,
    #[serde(default = "default_recent_sessions")]
    pub recent_sessions: usize,
    #[serde(default = "default_period")]
    pub default_period: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_start_time() -> String {
    "18:00".to_string()
}
fn default_end_time() -> String {
    "22:00".to_string()
}
fn default_recent_sessions() -> usize {
    5
}
fn default_period() -> String {
    "week".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_start_time: default_start_time(),
            default_end_time: default_end_time(),
            recent_sessions: default_recent_sessions(),
            default_period: default_period(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.profitrider`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".profitrider")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("profitrider.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("profitrider.sqlite")
    }

    /// Resolve a user-supplied database path: `~/` is expanded and a
    /// relative path lives inside the config directory.
    pub fn resolve_db_path(raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = Self::resolve_db_path(&cfg.database)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    /// Keys from `CONFIG_KEYS` absent in the file on disk.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(Self::config_file()).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let missing = CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| yaml.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the config file (unless `is_test`) and create an empty DB
    /// file. Returns the database path that was set up.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        // DB path: user provided (absolute or relative to the config dir) or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create {}: {}", db_path.display(), e))
            })?;
        }

        Ok(db_path)
    }
}
