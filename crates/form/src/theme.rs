//! Light/dark theme preference.
//!
//! The preference is an injected value, not ambient global state: [`ThemeSetting::load`] reads
//! the store once, and only [`ThemeSetting::set`] / [`ThemeSetting::toggle`] write back, and only
//! when the value actually changes.

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name used by [`FileThemeStore::in_dir`].
pub const THEME_FILENAME: &str = "theme.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FormError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Persistent storage for the theme preference.
pub trait ThemeStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> FormResult<Option<Theme>>;
    fn save(&self, theme: Theme) -> FormResult<()>;
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Stores the preference as `{"theme": "light"|"dark"}` in a JSON file.
#[derive(Clone, Debug)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(THEME_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> FormResult<Option<Theme>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FormError::ThemeRead(e)),
        };
        let file: ThemeFile = serde_json::from_str(&raw).map_err(FormError::ThemeParse)?;
        Ok(Some(file.theme))
    }

    fn save(&self, theme: Theme) -> FormResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(FormError::ThemeWrite)?;
        }
        let json = serde_json::to_string_pretty(&ThemeFile { theme })
            .map_err(FormError::ThemeSerialization)?;
        fs::write(&self.path, json).map_err(FormError::ThemeWrite)
    }
}

/// The theme in effect for this process, backed by a [`ThemeStore`].
#[derive(Debug)]
pub struct ThemeSetting<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSetting<S> {
    /// Read the stored preference once. Missing or unreadable values fall back to light.
    pub fn load(store: S) -> Self {
        let current = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Ignoring stored theme preference: {}", e);
                Theme::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Change the theme. Returns `true` if the value changed and was written to the store.
    ///
    /// On a write failure the in-memory value is left unchanged.
    pub fn set(&mut self, theme: Theme) -> FormResult<bool> {
        if theme == self.current {
            return Ok(false);
        }
        self.store.save(theme)?;
        self.current = theme;
        Ok(true)
    }

    pub fn toggle(&mut self) -> FormResult<Theme> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
