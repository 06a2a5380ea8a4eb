//! Configuration for widepath (`config.toml`)
//!
//! Looked up in order: an explicit path, `$WIDEPATH_CONFIG_DIR/config.toml`,
//! then `<user config dir>/widepath/config.toml`. A missing file means
//! defaults. Command-line flags override anything loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::{Result, WidepathError};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "widepath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WIDEPATH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidepathConfig {
    /// Solver used by `path` and `bandwidth` when no `--algorithm` is given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Output format when no `--format` is given
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Cap on the number of sources an all-pairs verification visits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sources: Option<usize>,
}

impl WidepathConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WidepathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(e) => {
                        tracing::debug!(error = %e, "no config directory, using defaults");
                        return Ok(Self::default());
                    }
                };
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WidepathError::io_operation("read config", path.display(), e))?;
        let config: WidepathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WidepathError::io_operation("create config directory", parent.display(), e)
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| WidepathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| WidepathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WidepathConfig::default();
        assert_eq!(config.default_algorithm, Algorithm::Heap);
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.verify.max_sources.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = WidepathConfig {
            default_algorithm: Algorithm::Kruskal,
            format: OutputFormat::Json,
            verify: VerifyConfig {
                max_sources: Some(12),
            },
        };
        config.save(&path).unwrap();

        let loaded = WidepathConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_algorithm = \"scan\"\n").unwrap();

        let loaded = WidepathConfig::load(&path).unwrap();
        assert_eq!(loaded.default_algorithm, Algorithm::Scan);
        assert_eq!(loaded.format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_algorithm_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_algorithm = \"bellman\"\n").unwrap();
        assert!(matches!(
            WidepathConfig::load(&path),
            Err(WidepathError::Toml(_))
        ));
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        assert!(WidepathConfig::resolve(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
