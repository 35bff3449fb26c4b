use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use tracing::info;

use crate::constants::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILES};
use crate::models::TableConfig;

/// Source that produced the table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path given directly, e.g. on the command line.
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// A validated configuration plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLoad {
    pub config: TableConfig,
    pub source: ConfigSource,
}

/// Resolves configuration relative to a base directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$TALLY_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TALLY_CONFIG_JSON` (inline JSON),
    /// 3) `tally.toml`/`tally.json` under the base directory,
    /// 4) defaults.
    pub fn load_from_env(&self) -> anyhow::Result<ConfigLoad> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Same as [`load_from_env`](Self::load_from_env) with a custom variable
    /// lookup.
    pub fn load_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<ConfigLoad> {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = self.resolve(Path::new(path_str.trim()));
            let config = Self::load_from_file(&path)?;
            return Self::finish(config, ConfigSource::EnvPath(path));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Self::finish(parsed, ConfigSource::EnvInline);
        }

        if let Some(path) = self.find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Self::finish(config, ConfigSource::File(path));
        }

        Self::finish(TableConfig::default(), ConfigSource::Default)
    }

    /// Load a file named explicitly by the caller.
    pub fn load_explicit(&self, path: &Path) -> anyhow::Result<ConfigLoad> {
        let path = self.resolve(path);
        let config = Self::load_from_file(&path)?;
        Self::finish(config, ConfigSource::Explicit(path))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<TableConfig> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read table config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid table config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid table config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<TableConfig> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse table config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<TableConfig> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid table config json: {err}"))
    }

    fn finish(
        config: TableConfig,
        source: ConfigSource,
    ) -> anyhow::Result<ConfigLoad> {
        config.validate()?;
        info!(source = ?source, "table configuration loaded");
        Ok(ConfigLoad { config, source })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
