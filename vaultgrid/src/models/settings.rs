use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    ProjectDir,
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    Date,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Name
    }
}

/// The panel configuration. Unknown fields in the settings file are ignored
/// and missing ones fall back to the defaults, so a partial file merges
/// cleanly over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub block_size: f32,
    pub show_file_extensions: bool,
    pub sort_by: SortBy,
    pub grid_gap: f32,
    pub font_size: f32,
    pub text_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            block_size: 120.0,
            show_file_extensions: true,
            sort_by: SortBy::Name,
            grid_gap: 16.0,
            font_size: 13.0,
            text_color: String::new(),
        }
    }
}

pub struct SettingsStore {
    config_path: PathBuf,
}

impl SettingsStore {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn default_store() -> Result<Self, SettingsError> {
        let project_dirs =
            ProjectDirs::from("app", "vaultgrid", "Vaultgrid").ok_or(SettingsError::ProjectDir)?;
        Ok(Self::new(project_dirs.config_dir().join("settings.json")))
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.config_path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_defaults_when_missing_file() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = store.load().expect("load settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "font_size": 16.0, "sort_by": "date" }"#).expect("write");

        let settings = SettingsStore::new(path).load().expect("load settings");
        assert_eq!(settings.font_size, 16.0);
        assert_eq!(settings.sort_by, SortBy::Date);
        // Untouched fields keep their defaults.
        assert_eq!(settings.block_size, 120.0);
        assert!(settings.show_file_extensions);
        assert_eq!(settings.text_color, "");
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

        let mut settings = Settings::default();
        settings.block_size = 160.0;
        settings.show_file_extensions = false;
        settings.text_color = "#c9d1d9".to_string();
        store.save(&settings).expect("save settings");

        assert_eq!(store.load().expect("load settings"), settings);
    }
}
