//! User settings
//!
//! Read from `settings.ron` in the platform config directory. A missing file
//! means defaults; a broken one is reported and also falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::save::{default_data_dir, DEFAULT_STORAGE_KEY};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "HDXP_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where saved calculations live (platform data dir when unset)
    pub data_dir: Option<PathBuf>,
    /// Key the history is stored under
    pub storage_key: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let mut settings = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        settings.apply_data_dir_override(std::env::var(DATA_DIR_ENV).ok());
        settings
    }

    /// Non-empty override replaces the configured data directory
    fn apply_data_dir_override(&mut self, dir: Option<String>) {
        if let Some(dir) = dir.filter(|d| !d.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Data directory in effect
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Default settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "hdxp", "hdxp") {
        proj_dirs.config_dir().join("settings.ron")
    } else {
        PathBuf::from("./settings.ron")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.ron"));
        assert_eq!(settings.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_data_dir_override() {
        let mut settings = Settings {
            data_dir: Some(PathBuf::from("/from/file")),
            ..Settings::default()
        };
        settings.apply_data_dir_override(Some(String::new()));
        assert_eq!(settings.data_dir, Some(PathBuf::from("/from/file")));
        settings.apply_data_dir_override(None);
        assert_eq!(settings.data_dir, Some(PathBuf::from("/from/file")));
        settings.apply_data_dir_override(Some("/from/env".to_string()));
        assert_eq!(settings.resolved_data_dir(), PathBuf::from("/from/env"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, r#"(storage_key: "campaign-2")"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.storage_key, "campaign-2");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(storage_key: ").unwrap();
        assert_eq!(Settings::load_from(&path).storage_key, DEFAULT_STORAGE_KEY);
    }
}
