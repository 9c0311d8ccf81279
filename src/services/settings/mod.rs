//! Loading and saving user settings as a TOML file in the platform config
//! directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new() -> Self {
        Self {
            path: settings_path(),
        }
    }

    /// Read settings from disk, falling back to defaults on any failure.
    /// A missing file is normal on first run; anything else is logged.
    pub fn load_or_default() -> Settings {
        let service = Self::new();
        match service.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                log::warn!("failed to load settings, using defaults: {:#}", err);
                Settings::default()
            }
        }
    }

    fn load(&self) -> Result<Option<Settings>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(settings))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("no config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(settings).context("serializing settings")?;
        fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "slotweek", "SlotWeek")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_yields_none() {
        let service = SettingsService {
            path: Some(PathBuf::from("/nonexistent/slotweek/settings.toml")),
        };
        assert!(matches!(service.load(), Ok(None)));
    }

    #[test]
    fn test_load_without_config_dir_yields_none() {
        let service = SettingsService { path: None };
        assert!(matches!(service.load(), Ok(None)));
    }

    #[test]
    fn test_save_without_config_dir_errors() {
        let service = SettingsService { path: None };
        assert!(service.save(&Settings::default()).is_err());
    }
}
