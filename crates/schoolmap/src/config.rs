//! Configuration management for the schoolmap CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (SCHOOLMAP_*)
//! 3. Config file (~/.config/schoolmap/config.toml)
//! 4. Default values

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database URL, or "memory" for the in-memory store.
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite:schools.db?mode=rwc".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports configuration errors but falls back to defaults so a broken
    /// config file never prevents startup.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("SCHOOLMAP_"));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {e}");
                Config::default()
            }
        }
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("schoolmap")
            .join("config.toml")
    }
}

/// Prints the effective configuration as TOML.
pub fn show_config(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("Failed to render config: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.database_url.starts_with("sqlite:"));
    }
}
