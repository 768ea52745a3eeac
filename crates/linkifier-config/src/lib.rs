use linkifier_engine::{LinkifyOptions, Scheme};
use serde::{Deserialize, Serialize};
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

/// User settings, stored as TOML. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme for links without one, e.g. `"https://"` or just `"ftp"`.
    pub default_scheme: String,
    pub key_base: String,
    /// Element tags whose contents are never linkified.
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let options = LinkifyOptions::default();
        Self {
            default_scheme: options.default_scheme.to_string(),
            key_base: options.key_base,
            ignore: options.ignored_tags,
        }
    }
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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/linkifier");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds the options handed to the engine.
    pub fn to_options(&self) -> LinkifyOptions {
        LinkifyOptions {
            default_scheme: Scheme::new(self.default_scheme.clone()),
            key_base: self.key_base.clone(),
            ignored_tags: self.ignore.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/linkifier/config.toml"));
    }

    #[test]
    fn test_defaults_match_engine() {
        let config = Config::default();
        assert_eq!(config.default_scheme, "http://");
        assert_eq!(config.key_base, "linkifier");
        assert_eq!(config.ignore, vec!["a".to_string(), "button".to_string()]);
        assert_eq!(config.to_options(), LinkifyOptions::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            default_scheme: "https://".into(),
            key_base: "doc".into(),
            ignore: vec!["a".into(), "pre".into()],
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(r#"default_scheme = "ftp""#).unwrap();

        assert_eq!(config.key_base, "linkifier");
        assert_eq!(config.to_options().default_scheme.as_str(), "ftp://");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "ignore = 3").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            default_scheme: "file".into(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config, test_config);
    }
}
