//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/randtree/randtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `RANDTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Identifier, WidthBounds};

/// Generation settings for randtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of levels below the root, at most `MAX_DEPTH_LIMIT`
    pub max_depth: u32,
    /// Minimum children per internal node (inclusive)
    pub min_width: u32,
    /// Maximum children per internal node (inclusive)
    pub max_width: u32,
    /// Root identifier, e.g. "0" or "0.1"
    pub root: String,
    /// Random seed; entropy when unset
    pub seed: Option<u64>,
    /// Also print the tree before labeling
    pub show_unlabeled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_width: 1,
            max_width: 2,
            root: "0".into(),
            seed: None,
            show_unlabeled: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_depth: Option<u32>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub root: Option<String>,
    pub seed: Option<u64>,
    pub show_unlabeled: Option<bool>,
}

/// Get the XDG config directory for randtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "randtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("randtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Validated width bounds.
    pub fn bounds(&self) -> ApplicationResult<WidthBounds> {
        Ok(WidthBounds::new(self.min_width, self.max_width)?)
    }

    /// Parsed root identifier.
    pub fn root_identifier(&self) -> ApplicationResult<Identifier> {
        Ok(self.root.parse()?)
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            min_width: overlay.min_width.unwrap_or(self.min_width),
            max_width: overlay.max_width.unwrap_or(self.max_width),
            root: overlay.root.clone().unwrap_or_else(|| self.root.clone()),
            seed: overlay.seed.or(self.seed),
            show_unlabeled: overlay.show_unlabeled.unwrap_or(self.show_unlabeled),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("load: config file {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RANDTREE_* environment variables as explicit overrides.
    ///
    /// Values stay strings until read, so a root such as `1.0` is never
    /// reinterpreted as a number.
    fn apply_env_overrides(settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RANDTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            max_depth: get_opt(&config, "max_depth")?,
            min_width: get_opt(&config, "min_width")?,
            max_width: get_opt(&config, "max_width")?,
            root: get_opt(&config, "root")?,
            seed: get_opt(&config, "seed")?,
            show_unlabeled: get_opt(&config, "show_unlabeled")?,
        };
        Ok(settings.merge_with(&raw))
    }

    /// Render as TOML, e.g. for `config show`.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Missing keys are `None`; present but malformed values are errors.
fn get_opt<T: serde::de::DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_bounds_then_one_to_two() {
        let settings = Settings::default();
        let bounds = settings.bounds().unwrap();
        assert_eq!((bounds.min(), bounds.max()), (1, 2));
        assert_eq!(settings.root_identifier().unwrap(), Identifier::root());
    }

    #[test]
    fn given_partial_overlay_when_merge_then_keeps_unspecified() {
        let overlay = RawSettings {
            max_depth: Some(2),
            seed: Some(42),
            ..Default::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.max_depth, 2);
        assert_eq!(merged.seed, Some(42));
        assert_eq!(merged.max_width, 2);
    }

    #[test]
    fn given_inverted_bounds_when_bounds_then_domain_error() {
        let settings = Settings {
            min_width: 3,
            max_width: 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.bounds(),
            Err(ApplicationError::Domain(_))
        ));
    }
}
