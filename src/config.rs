use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name the parent greets with when the child supplies no argument
    #[serde(default = "default_parent_name")]
    pub parent_name: String,
    /// Name the child supplies on the with-argument button
    #[serde(default = "default_child_name")]
    pub child_name: String,
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_parent_name() -> String {
    "there".to_string()
}

fn default_child_name() -> String {
    "Child".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parent_name: default_parent_name(),
            child_name: default_child_name(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".greet-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.parent_name, "there");
        assert_eq!(config.child_name, "Child");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"parent_name": "World"}"#).unwrap();
        assert_eq!(config.parent_name, "World");
        assert_eq!(config.child_name, "Child");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            parent_name: "World".to_string(),
            child_name: "Kiddo".to_string(),
            tick_rate_ms: 250,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parent_name, "World");
        assert_eq!(back.child_name, "Kiddo");
        assert_eq!(back.tick_rate_ms, 250);
    }
}
