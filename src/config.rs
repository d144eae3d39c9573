//! Application settings loaded from environment variables.

use std::{env, fmt, path::PathBuf, str::FromStr};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        };
        write!(f, "{s}")
    }
}

/// Application settings
///
/// Values come from environment variables with the same (upper-cased) names,
/// falling back to the defaults below. Unparseable values fall back silently,
/// matching the permissive behavior of the original deployment.
#[derive(Debug, Clone)]
pub struct Settings {
    // App metadata
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,

    // API settings
    pub api_prefix: String,
    pub cors_origins: Vec<String>,

    // Storage settings
    pub persist_to_disk: bool,
    pub storage_dir: PathBuf,
    pub scores_file: String,
    pub rooms_file: String,

    // Server settings
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Key Dash Adventure API".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            api_prefix: "/api".to_string(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            persist_to_disk: true,
            storage_dir: PathBuf::from("data"),
            scores_file: "highscores.json".to_string(),
            rooms_file: "rooms.json".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_name: env_or("APP_NAME", defaults.app_name),
            app_version: defaults.app_version,
            environment: env_parsed("ENVIRONMENT", defaults.environment),
            api_prefix: env_or("API_PREFIX", defaults.api_prefix),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            persist_to_disk: env_parsed("PERSIST_TO_DISK", defaults.persist_to_disk),
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            scores_file: env_or("SCORES_FILE", defaults.scores_file),
            rooms_file: env_or("ROOMS_FILE", defaults.rooms_file),
            host: env_or("HOST", defaults.host),
            port: env_parsed("PORT", defaults.port),
        }
    }

    /// Full path to the scores storage file
    pub fn scores_path(&self) -> PathBuf {
        self.storage_dir.join(&self.scores_file)
    }

    /// Full path to the rooms storage file
    pub fn rooms_path(&self) -> PathBuf {
        self.storage_dir.join(&self.rooms_file)
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
