//! Theme factory and registry.
//!
//! [`create_theme`] resolves a [`ThemeOverrides`] value against the built-in
//! tokens and stamps the result with a process-unique id. Resolved themes are
//! immutable; changing a token means creating a new theme.

use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    merge::DeepMerge,
    tokens::{
        base_shadows, base_typography, dark_colors, light_colors, PartialThemeColors,
        PartialThemeRadii, PartialThemeShadows, PartialThemeSpacing, PartialThemeTypography,
        ThemeColors, ThemeRadii, ThemeShadows, ThemeSpacing, ThemeTypography, BASE_RADII,
        BASE_SPACING,
    },
};

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark surfaces with light text.
    #[default]
    Dark,
    /// Light surfaces with dark text.
    Light,
}

impl ThemeMode {
    /// Lowercase name used in ids, CSS and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Base color palette for this mode.
    #[must_use]
    pub fn base_colors(self) -> &'static ThemeColors {
        match self {
            ThemeMode::Dark => dark_colors(),
            ThemeMode::Light => light_colors(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(ThemeError::UnknownMode(name.to_owned())),
        }
    }
}

/// Error returned when a theme lookup fails.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Raised when the mode name is neither `dark` nor `light`.
    #[error("unknown theme mode '{0}'")]
    UnknownMode(String),
    /// Raised when no theme is registered under the name.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

/// A fully resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WispTheme {
    /// Unique id of the form `wisp-<mode>-<n>`, usable as a memoization key.
    pub id: String,
    /// Mode whose base palette was used.
    pub mode: ThemeMode,
    /// Semantic colors.
    pub colors: ThemeColors,
    /// Spacing scale in pixels.
    pub spacing: ThemeSpacing,
    /// Font stacks, sizes, weights and line heights.
    pub typography: ThemeTypography,
    /// Corner radii in pixels.
    pub radii: ThemeRadii,
    /// Elevation shadows as CSS `box-shadow` values.
    pub shadows: ThemeShadows,
}

impl WispTheme {
    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        create_theme(ThemeOverrides::default())
    }

    /// The built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        create_theme(ThemeOverrides::for_mode(ThemeMode::Light))
    }

    /// Whether this is a dark theme.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

/// Deeply partial theme supplied by consumers.
///
/// Untouched scales and leaves fall back to the built-in tokens of the
/// selected mode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    /// Base palette to start from. Defaults to dark.
    pub mode: Option<ThemeMode>,
    /// Color overrides.
    pub colors: PartialThemeColors,
    /// Spacing overrides.
    pub spacing: PartialThemeSpacing,
    /// Typography overrides.
    pub typography: PartialThemeTypography,
    /// Radius overrides.
    pub radii: PartialThemeRadii,
    /// Shadow overrides.
    pub shadows: PartialThemeShadows,
}

impl ThemeOverrides {
    /// Overrides that only select a mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// Parses overrides from JSON with camelCase token names.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Source of theme ids.
///
/// Ids are drawn from a monotonically increasing counter. The first id handed
/// out after construction or [`reset`](Self::reset) carries the number 1.
#[derive(Debug, Default)]
pub struct ThemeIdGenerator {
    issued: AtomicU64,
}

static GLOBAL_IDS: ThemeIdGenerator = ThemeIdGenerator::new();

impl ThemeIdGenerator {
    /// Creates a generator that has not issued any id.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// The process-wide generator used by [`create_theme`].
    #[must_use]
    pub fn global() -> &'static ThemeIdGenerator {
        &GLOBAL_IDS
    }

    /// Issues the next id for a theme in `mode`.
    pub fn next_id(&self, mode: ThemeMode) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("wisp-{mode}-{n}")
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Restarts numbering. Only meant for tests that assert exact ids.
    pub fn reset(&self) {
        self.issued.store(0, Ordering::Relaxed);
    }
}

/// Resolves `overrides` against the built-in tokens using the global id
/// generator.
#[must_use]
pub fn create_theme(overrides: ThemeOverrides) -> WispTheme {
    create_theme_with(overrides, ThemeIdGenerator::global())
}

/// Like [`create_theme`] with an explicit id generator.
#[must_use]
pub fn create_theme_with(overrides: ThemeOverrides, ids: &ThemeIdGenerator) -> WispTheme {
    let ThemeOverrides {
        mode,
        colors,
        spacing,
        typography,
        radii,
        shadows,
    } = overrides;
    let mode = mode.unwrap_or_default();

    let theme = WispTheme {
        id: ids.next_id(mode),
        mode,
        colors: mode.base_colors().clone().deep_merge(colors),
        spacing: BASE_SPACING.deep_merge(spacing),
        typography: base_typography().deep_merge(typography),
        radii: BASE_RADII.deep_merge(radii),
        shadows: base_shadows().deep_merge(shadows),
    };
    debug!(id = %theme.id, mode = %mode, "created theme");
    theme
}

struct ThemeRegistryInner {
    themes: Mutex<HashMap<String, Arc<WispTheme>>>,
    active: Mutex<String>,
}

/// Named collection of resolved themes with one active entry.
///
/// Starts with the built-in `dark` and `light` themes, `dark` active.
#[derive(Clone)]
pub struct ThemeRegistry {
    inner: Arc<ThemeRegistryInner>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        let themes = [ThemeMode::Dark, ThemeMode::Light]
            .into_iter()
            .map(|mode| {
                let theme = create_theme(ThemeOverrides::for_mode(mode));
                (mode.as_str().to_owned(), Arc::new(theme))
            })
            .collect();

        Self {
            inner: Arc::new(ThemeRegistryInner {
                themes: Mutex::new(themes),
                active: Mutex::new(ThemeMode::Dark.as_str().to_owned()),
            }),
        }
    }
}

impl ThemeRegistry {
    /// Creates a new registry with the built-in themes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `overrides` and stores the result under `name`, replacing any
    /// previous theme with that name.
    pub fn register(&self, name: impl Into<String>, overrides: ThemeOverrides) -> Arc<WispTheme> {
        let name = name.into();
        let theme = Arc::new(create_theme(overrides));
        debug!(%name, id = %theme.id, "registered theme");
        self.inner
            .themes
            .lock()
            .expect("theme mutex poisoned")
            .insert(name, theme.clone());
        theme
    }

    /// Returns the theme registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<WispTheme>, ThemeError> {
        self.inner
            .themes
            .lock()
            .expect("theme mutex poisoned")
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_owned()))
    }

    /// Sorted names of all registered themes.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .inner
            .themes
            .lock()
            .expect("theme mutex poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Name of the active theme.
    #[must_use]
    pub fn active_name(&self) -> String {
        self.inner.active.lock().expect("theme mutex poisoned").clone()
    }

    /// The active theme.
    #[must_use]
    pub fn active(&self) -> Arc<WispTheme> {
        let name = self.active_name();
        self.get(&name)
            .expect("active theme is always registered")
    }

    /// Makes `name` the active theme.
    pub fn activate(&self, name: &str) -> Result<Arc<WispTheme>, ThemeError> {
        let theme = self.get(name)?;
        *self.inner.active.lock().expect("theme mutex poisoned") = name.to_owned();
        debug!(%name, "activated theme");
        Ok(theme)
    }

    /// Switches to the built-in theme of the opposite mode.
    pub fn toggle_mode(&self) -> Arc<WispTheme> {
        let next = self.active().mode.toggled();
        self.activate(next.as_str())
            .expect("built-in themes are always registered")
    }

    /// Looks up a mode by its name.
    pub fn mode_from_str(&self, name: &str) -> Result<ThemeMode, ThemeError> {
        name.parse()
    }
}
