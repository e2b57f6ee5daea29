use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::ConfigError;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "TEAM_BUILDER_CONFIG";
/// Config file looked for when the environment variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "team-builder.ron";

/// Application configuration for the binaries.
///
/// All fields are optional in the file; a missing file yields the defaults.
/// Unlike the persisted roster store, a malformed config file is an explicit
/// error: it is user-authored input, not best-effort cache state.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP endpoint serving the catalog as a JSON array. When unset, the
    /// local catalog file is used instead.
    pub catalog_endpoint: Option<String>,
    /// Bundled RON catalog used when no endpoint is configured.
    pub catalog_file: PathBuf,
    /// Directory holding the persisted roster and saved-team files.
    pub storage_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_endpoint: None,
            catalog_file: PathBuf::from("data/catalog.ron"),
            storage_dir: default_storage_dir(),
        }
    }
}

impl AppConfig {
    /// Load the config named by `TEAM_BUILDER_CONFIG`, falling back to
    /// `team-builder.ron` in the working directory, falling back to defaults
    /// when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        ron::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pokemon-team-builder")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("team-builder.ron");
        fs::write(
            &path,
            r#"(
                catalog_endpoint: Some("http://127.0.0.1:8000/"),
                storage_dir: "/tmp/teams",
            )"#,
        )
        .expect("write config");

        let config = AppConfig::load_from(&path).expect("config should parse");
        assert_eq!(
            config.catalog_endpoint.as_deref(),
            Some("http://127.0.0.1:8000/")
        );
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/teams"));
        // Unset fields keep their defaults.
        assert_eq!(config.catalog_file, PathBuf::from("data/catalog.ron"));
    }

    #[test]
    fn malformed_config_is_an_explicit_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("team-builder.ron");
        fs::write(&path, "(catalog_endpoint: 7)").expect("write config");

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
