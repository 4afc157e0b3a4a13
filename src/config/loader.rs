use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::{CatalogSource, Settings};
use crate::i18n;
use crate::{GuideError, Result};

/// Overrides the catalog file path
pub const CATALOG_ENV: &str = "CONNECTOR_GUIDE_CATALOG";

/// Overrides the display locale
pub const LOCALE_ENV: &str = "CONNECTOR_GUIDE_LOCALE";

/// Resolves settings from file, environment and command line.
///
/// Precedence, lowest first:
/// 1. Built-in defaults
/// 2. Settings file (`--config`, else the platform config dir if present)
/// 3. `CONNECTOR_GUIDE_CATALOG` / `CONNECTOR_GUIDE_LOCALE`
/// 4. `--catalog` / `--locale`
#[derive(Debug, Default)]
pub struct SettingsLoader {
    config_path: Option<PathBuf>,
    catalog_override: Option<PathBuf>,
    locale_override: Option<String>,
    skip_platform_config: bool,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit settings file. It must exist.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_catalog(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_override = path;
        self
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale_override = locale;
        self
    }

    /// Ignore the per-user settings file
    pub fn without_platform_config(mut self) -> Self {
        self.skip_platform_config = true;
        self
    }

    pub fn load(&self) -> Result<Settings> {
        let mut settings = match self.settings_file()? {
            Some(path) => Self::load_file(&path)?,
            None => {
                debug!("No settings file; using defaults");
                Settings::default()
            }
        };

        if let Ok(path) = std::env::var(CATALOG_ENV) {
            debug!("{} overrides catalog: {}", CATALOG_ENV, path);
            settings.catalog = CatalogSource::File {
                path: PathBuf::from(path),
            };
        }
        if let Ok(locale) = std::env::var(LOCALE_ENV) {
            debug!("{} overrides locale: {}", LOCALE_ENV, locale);
            settings.locale = locale;
        }

        if let Some(path) = &self.catalog_override {
            settings.catalog = CatalogSource::File { path: path.clone() };
        }
        if let Some(locale) = &self.locale_override {
            settings.locale = locale.clone();
        }

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Default settings file location for this platform
    pub fn platform_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "connector-guide", "connector-guide")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn settings_file(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(GuideError::Config(format!(
                    "Settings file does not exist: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }

        if self.skip_platform_config {
            return Ok(None);
        }

        Ok(Self::platform_config_path().filter(|path| path.exists()))
    }

    /// Parse a settings file. Relative paths inside it resolve against its directory.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GuideError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut settings: Settings = serde_yaml_ng::from_str(&content).map_err(|e| {
            GuideError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        if let Some(base) = path.parent() {
            if let CatalogSource::File { path } = &mut settings.catalog {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
            if let Some(dir) = &mut settings.locales_dir {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(settings: &Settings) -> Result<()> {
        if !i18n::is_supported(&settings.locale) {
            return Err(GuideError::UnknownLocale(settings.locale.clone()));
        }

        match &settings.catalog {
            CatalogSource::File { path } if path.as_os_str().is_empty() => Err(
                GuideError::Config("Catalog file path must not be empty".to_string()),
            ),
            CatalogSource::Remote(remote) if remote.url.trim().is_empty() => Err(
                GuideError::Config("Remote catalog url must not be empty".to_string()),
            ),
            _ => Ok(()),
        }
    }
}
