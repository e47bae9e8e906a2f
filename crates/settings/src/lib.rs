#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use designsystem::{create_theme, deep_merge_json, ThemeMode, ThemeOverrides, WispTheme};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

static QUALIFIER: &str = "dev.wisp";
static ORGANIZATION: &str = "wisp";
static APPLICATION: &str = "wisp";

/// Environment variable that overrides the stored theme mode.
pub const THEME_MODE_ENV: &str = "WISP_THEME_MODE";

const RECENT_LIMIT: usize = 10;

/// Persistent configuration stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WispConfig {
    /// Preferred mode. Takes precedence over a `mode` inside `overrides`.
    pub mode: Option<ThemeMode>,
    /// Theme overrides in the same camelCase shape `ThemeOverrides` parses.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub overrides: Value,
    /// Recently activated theme names, most recent first.
    pub recent_themes: Vec<String>,
}

impl WispConfig {
    /// Adds a theme to the MRU list while deduplicating previous entries.
    pub fn push_recent(&mut self, theme_name: impl Into<String>) {
        let name = theme_name.into();
        self.recent_themes.retain(|existing| existing != &name);
        self.recent_themes.insert(0, name);
        self.recent_themes.truncate(RECENT_LIMIT);
    }

    /// Returns the config with environment overrides applied.
    #[must_use]
    pub fn with_env(mut self, env: &EnvOverrides) -> Self {
        if let Some(mode) = env.mode {
            self.mode = Some(mode);
        }
        self
    }

    /// Parses the stored overrides, folding in the top-level mode.
    pub fn theme_overrides(&self) -> Result<ThemeOverrides, ConfigError> {
        let mut overrides = if self.overrides.is_null() {
            ThemeOverrides::default()
        } else {
            ThemeOverrides::deserialize(&self.overrides)?
        };
        if self.mode.is_some() {
            overrides.mode = self.mode;
        }
        Ok(overrides)
    }
}

/// Resolves the configured theme.
pub fn resolve_theme(config: &WispConfig) -> Result<WispTheme, ConfigError> {
    Ok(create_theme(config.theme_overrides()?))
}

/// Errors raised when reading or writing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wraps underlying IO errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Wraps JSON serialization issues.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reader/writer responsible for persisting [`WispConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigStore {
    /// Creates a store rooted at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_dir(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Loads the configuration or returns a default value.
    pub fn load(&self) -> Result<WispConfig, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(WispConfig::default());
        }
        let bytes = fs::read(&self.path)?;
        let config = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    /// Persists the configuration to disk.
    pub fn save(&self, config: &WispConfig) -> Result<(), ConfigError> {
        self.ensure_dir()?;
        let buffer = serde_json::to_vec_pretty(config)?;
        fs::write(&self.path, buffer)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Returns the backing file path, primarily used in diagnostics.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads several config files and deep-merges them in order, later files
/// winning. Missing files are skipped.
///
/// Objects merge key by key; any other value, including arrays and `null`,
/// replaces what the earlier layers set.
pub fn load_layered<P: AsRef<Path>>(layers: &[P]) -> Result<WispConfig, ConfigError> {
    let mut merged = Value::Object(Map::new());
    for layer in layers {
        let path = layer.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "skipping missing config layer");
            continue;
        }
        let value: Value = serde_json::from_slice(&fs::read(path)?)?;
        deep_merge_json(&mut merged, &value);
        debug!(path = %path.display(), "merged config layer");
    }
    Ok(serde_json::from_value(merged)?)
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join("wisp.json"))
        .unwrap_or_else(|| PathBuf::from("wisp.json"))
}

/// Settings read from environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Mode from [`THEME_MODE_ENV`].
    pub mode: Option<ThemeMode>,
}

impl EnvOverrides {
    /// Hydrates overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Hydrates overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored; unparsable ones are logged and ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mode = lookup(THEME_MODE_ENV)
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| match value.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    warn!(variable = THEME_MODE_ENV, %err, "ignoring environment override");
                    None
                }
            });
        Self { mode }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn config_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("wisp.json");
        let store = ConfigStore::new(path.clone());
        let config = WispConfig {
            mode: Some(ThemeMode::Light),
            overrides: json!({ "colors": { "accent": { "primary": "#E11D48" } } }),
            ..WispConfig::default()
        };
        store.save(&config).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), WispConfig::default());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wisp.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ConfigStore::new(path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn recent_themes_dedupe_and_cap() {
        let mut config = WispConfig::default();
        for i in 0..12 {
            config.push_recent(format!("theme-{i}"));
        }
        config.push_recent("theme-5");
        assert_eq!(config.recent_themes.len(), 10);
        assert_eq!(config.recent_themes[0], "theme-5");
        assert_eq!(
            config.recent_themes.iter().filter(|n| *n == "theme-5").count(),
            1
        );
    }

    #[test]
    fn layers_merge_in_order() {
        let dir = tempdir().unwrap();
        let user = dir.path().join("user.json");
        let project = dir.path().join("project.json");
        fs::write(
            &user,
            json!({
                "mode": "light",
                "overrides": {
                    "colors": { "accent": { "primary": "#111111", "secondary": "#222222" } }
                },
                "recentThemes": ["a", "b"]
            })
            .to_string(),
        )
        .unwrap();
        fs::write(
            &project,
            json!({
                "overrides": { "colors": { "accent": { "primary": "#E11D48" } } },
                "recentThemes": ["c"]
            })
            .to_string(),
        )
        .unwrap();

        let config = load_layered(&[user, dir.path().join("missing.json"), project]).unwrap();
        assert_eq!(config.mode, Some(ThemeMode::Light));
        assert_eq!(config.recent_themes, vec!["c".to_owned()]);

        let theme = resolve_theme(&config).unwrap();
        assert_eq!(theme.colors.accent.primary, "#E11D48");
        assert_eq!(theme.colors.accent.secondary, "#222222");
        assert!(!theme.is_dark());
    }

    #[test]
    fn top_level_mode_beats_overrides_mode() {
        let config = WispConfig {
            mode: Some(ThemeMode::Dark),
            overrides: json!({ "mode": "light" }),
            ..WispConfig::default()
        };
        assert_eq!(
            config.theme_overrides().unwrap().mode,
            Some(ThemeMode::Dark)
        );
        let unset = WispConfig {
            mode: None,
            ..config
        };
        assert_eq!(unset.theme_overrides().unwrap().mode, Some(ThemeMode::Light));
    }

    #[test]
    fn bad_overrides_surface_as_errors() {
        let config = WispConfig {
            overrides: json!({ "spacing": { "md": "wide" } }),
            ..WispConfig::default()
        };
        assert!(matches!(
            resolve_theme(&config),
            Err(ConfigError::Serialization(_))
        ));
    }

    #[test]
    fn env_mode_override() {
        let env = EnvOverrides::from_lookup(|key| {
            (key == THEME_MODE_ENV).then(|| "Light".to_owned())
        });
        assert_eq!(env.mode, Some(ThemeMode::Light));
        let config = WispConfig {
            mode: Some(ThemeMode::Dark),
            ..WispConfig::default()
        }
        .with_env(&env);
        assert_eq!(config.mode, Some(ThemeMode::Light));

        let invalid = EnvOverrides::from_lookup(|_| Some("sepia".to_owned()));
        assert_eq!(invalid.mode, None);
        let empty = EnvOverrides::from_lookup(|_| Some(String::new()));
        assert_eq!(empty, EnvOverrides::default());
    }
}
