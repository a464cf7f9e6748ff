use crate::{ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, ServerConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for INTAKE_CONFIG_DIR env var, else use ./.intake/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply INTAKE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: INTAKE_CONFIG_DIR env var > ./.intake/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("INTAKE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".intake"))
    }

    /// Environment variables win over config.toml values.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("INTAKE_HOST") {
            self.server.host = host;
        }

        if let Some(port) = std::env::var("INTAKE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.server.port = port;
        }

        if let Ok(level) = std::env::var("INTAKE_LOG_LEVEL") {
            // FromStr never fails, invalid values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }

        if let Some(colored) = std::env::var("INTAKE_LOG_COLORED")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.logging.colored = colored;
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        // Validate log directory doesn't escape the config dir
        let log_dir = std::path::Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration at startup.
    pub fn log_summary(&self) {
        info!("Config: bind={}", self.bind_addr());
        info!(
            "Config: log level={:?}, file={:?}",
            self.logging.level.0, self.logging.file
        );
    }
}
