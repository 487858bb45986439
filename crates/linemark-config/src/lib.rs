use linemark_engine::{Lookahead, PatternSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "LINEMARK_CONFIG";

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

/// How the CLI prints a classified document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookahead: Lookahead,
    pub format: OutputFormat,
    /// Rules layered over the builtin pattern tables.
    #[serde(skip_serializing_if = "PatternSet::is_empty")]
    pub patterns: PatternSet,
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

    /// `$LINEMARK_CONFIG` if set, otherwise `~/.config/linemark/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_ENV).ok())
    }

    fn resolve_config_path(env_value: Option<String>) -> PathBuf {
        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            let path = PathBuf::from(&value);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/linemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builtin pattern tables with this config's overrides applied.
    pub fn patterns(&self) -> PatternSet {
        let mut set = PatternSet::builtin();
        set.merge(&self.patterns);
        set
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
