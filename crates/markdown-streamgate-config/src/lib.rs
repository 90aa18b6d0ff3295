use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Pacing settings for the reveal scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealSettings {
    /// `"sentence"` or `"word"`.
    pub mode: String,
    /// Custom boundary pattern for sentence mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Position-indexed delays in milliseconds; the last entry repeats.
    pub delays_ms: Vec<u64>,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            mode: "sentence".to_owned(),
            pattern: None,
            delays_ms: vec![50],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Custom tag names whose regions get newline protection around the
    /// batch parser.
    #[serde(default)]
    pub protected_tags: Vec<String>,

    /// Construct kind name → marker name. An empty value registers the kind
    /// under its default `incomplete-<kind>` marker.
    #[serde(default)]
    pub placeholders: BTreeMap<String, String>,

    #[serde(default)]
    pub reveal: RevealSettings,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-streamgate");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-streamgate/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original
            .placeholders
            .insert("image".to_owned(), String::new());
        original
            .placeholders
            .insert("link".to_owned(), "pending-link".to_owned());
        original.protected_tags.push("Custom".to_owned());
        original.reveal.delays_ms = vec![80, 50, 30];

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.placeholders, deserialized.placeholders);
        assert_eq!(original.protected_tags, deserialized.protected_tags);
        assert_eq!(original.reveal.delays_ms, deserialized.reveal.delays_ms);
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::load_from_path(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.protected_tags.push("Thinking".to_owned());
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded.protected_tags, vec!["Thinking".to_owned()]);
        assert_eq!(loaded.reveal.mode, "sentence");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "placeholders = 3").unwrap();

        match Config::load_from_path(&path) {
            Err(ConfigError::ConfigParseError { config_path, .. }) => {
                assert_eq!(config_path, path);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
