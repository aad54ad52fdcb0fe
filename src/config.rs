use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the catalogue file
pub const CATALOGUE_ENV: &str = "SHOWREEL_CATALOGUE";
/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SHOWREEL_DATA_DIR";
/// Environment variable overriding the screen shown at startup
pub const ROUTE_ENV: &str = "SHOWREEL_ROUTE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON or YAML catalogue file; the built-in sample is used when unset
    #[serde(default)]
    pub catalogue_path: Option<String>,
    /// Where storage and logs live; defaults to the config directory
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Number of shows featured in the home carousel
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Path of the screen shown at startup, e.g. `/favourites` or `/shows/3`
    #[serde(default)]
    pub start_route: Option<String>,
}

fn default_featured_count() -> usize {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            data_dir: None,
            featured_count: default_featured_count(),
            tick_rate_ms: default_tick_rate_ms(),
            start_route: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".showreel"))
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

    /// Load the config file, writing defaults on first run, then apply
    /// environment overrides
    pub fn load_or_default() -> Config {
        let config = match Self::load() {
            Some(config) => config,
            None => {
                let config = Config::default();
                if let Err(e) = config.save() {
                    tracing::debug!("Could not write default config: {}", e);
                }
                config
            }
        };
        config.with_env_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOGUE_ENV).filter(|p| !p.is_empty()) {
            self.catalogue_path = Some(path);
        }
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = Some(dir);
        }
        if let Some(route) = lookup(ROUTE_ENV).filter(|r| !r.is_empty()) {
            self.start_route = Some(route);
        }
        self
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => Self::config_dir(),
        }
    }

    pub fn storage_path(&self) -> Option<PathBuf> {
        self.data_dir().map(|dir| dir.join("storage.json"))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir().map(|dir| dir.join("showreel.log"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
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
    use std::collections::HashMap;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (CATALOGUE_ENV, "/tmp/shows.yaml"),
            (DATA_DIR_ENV, "/tmp/showreel"),
            (ROUTE_ENV, "/shows/3"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_env_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.catalogue_path.as_deref(), Some("/tmp/shows.yaml"));
        assert_eq!(config.start_route.as_deref(), Some("/shows/3"));
        assert_eq!(
            config.storage_path(),
            Some(PathBuf::from("/tmp/showreel/storage.json"))
        );
        assert_eq!(
            config.log_path(),
            Some(PathBuf::from("/tmp/showreel/showreel.log"))
        );
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config {
            catalogue_path: Some("a.json".to_string()),
            ..Config::default()
        }
        .with_env_overrides(|_| Some(String::new()));
        assert_eq!(config.catalogue_path.as_deref(), Some("a.json"));
    }
}
