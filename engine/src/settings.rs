// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::error::TextureError;

const APP_DIR: &str = "lantern";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RendererSettings {
    pub clear_color: [u8; 4],
    pub vsync: bool,
}

/// What to do when some media fails to load at startup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadFailurePolicy {
    #[default]
    Abort,
    /// Run anyway; textures that failed to load draw nothing.
    Continue,
}

impl LoadFailurePolicy {
    /// Decides whether a failed load stops startup.
    pub fn check(self, result: Result<(), TextureError>) -> Result<(), TextureError> {
        match (self, result) {
            (LoadFailurePolicy::Continue, Err(err)) => {
                log::warn!("Continuing without {:?}", err.path());
                Ok(())
            }
            (_, result) => result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaSettings {
    pub root: PathBuf,
    pub on_load_failure: LoadFailurePolicy,
}

impl MediaSettings {
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoSettings {
    pub variant: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub window: WindowSettings,
    pub renderer: RendererSettings,
    pub media: MediaSettings,
    pub demo: DemoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                title: String::from("SDL Tutorial"),
                width: 640,
                height: 480,
                target_fps: 60,
            },
            renderer: RendererSettings {
                clear_color: [0xFF, 0xFF, 0xFF, 0xFF],
                vsync: true,
            },
            media: MediaSettings {
                root: PathBuf::from("res"),
                on_load_failure: LoadFailurePolicy::Abort,
            },
            demo: DemoSettings {
                variant: String::from("key_press"),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization/Deserialization Error: {0}")]
    Serde(#[from] toml::de::Error),

    #[error("Serialization Error: {0}")]
    SerdeSer(#[from] toml::ser::Error),

    #[error("Configuration Directory Not Found")]
    ConfigDirNotFound,
}

/// Where the user and default settings files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    pub user: PathBuf,
    pub default: PathBuf,
}

impl SettingsPaths {
    /// `<config dir>/lantern/settings/{user,default}_settings.toml`
    pub fn from_config_dir() -> Result<Self, SettingsError> {
        let config_dir = config_dir().ok_or(SettingsError::ConfigDirNotFound)?;
        Ok(Self::under(&config_dir))
    }

    pub fn under(config_dir: &Path) -> Self {
        let settings_dir = config_dir.join(APP_DIR).join("settings");
        Self {
            user: settings_dir.join("user_settings.toml"),
            default: settings_dir.join("default_settings.toml"),
        }
    }
}

impl Settings {
    /// Loads settings from a specified file path.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to a specified file path, ensuring the directory exists.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads user settings from the platform config directory.
    /// Any failure falls back to the hardcoded defaults.
    pub fn load_user_settings() -> Self {
        match SettingsPaths::from_config_dir().and_then(|paths| Settings::initialize(&paths)) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Error initializing settings: {}. Using hardcoded defaults.", e);
                Settings::default()
            }
        }
    }

    /// Loads user settings, or the defaults when those are missing or unreadable.
    pub fn initialize(paths: &SettingsPaths) -> Result<Self, SettingsError> {
        if paths.user.exists() {
            match Settings::load_from_file(&paths.user) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    log::warn!(
                        "Failed to load user settings: {}. Attempting to load defaults.",
                        e
                    );
                    Settings::load_defaults(paths)
                }
            }
        } else {
            log::info!("User settings not found. Loading default settings.");
            Settings::load_defaults(paths)
        }
    }

    /// Loads default settings and saves them as user settings.
    fn load_defaults(paths: &SettingsPaths) -> Result<Self, SettingsError> {
        if paths.default.exists() {
            let settings = Settings::load_from_file(&paths.default)?;
            settings.save_to_file(&paths.user)?;
            log::info!("Default settings loaded and saved as user settings.");
            Ok(settings)
        } else {
            log::warn!("Default settings file not found. Using hardcoded defaults.");
            let settings = Settings::default();
            settings.save_to_file(&paths.default)?;
            settings.save_to_file(&paths.user)?;
            log::info!("Hardcoded defaults saved as default and user settings.");
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    const CUSTOM_SETTINGS: &str = r#"
        [window]
        title = "Viewports"
        width = 800
        height = 600
        target_fps = 30

        [renderer]
        clear_color = [0, 0, 0, 255]
        vsync = false

        [media]
        root = "assets"
        on_load_failure = "continue"

        [demo]
        variant = "viewports"
    "#;

    /// Path construction under the platform config dir. Changes process-wide env vars.
    #[test]
    #[serial]
    fn test_paths_follow_xdg_config_home() {
        let temp_dir = tempdir().unwrap();
        let original_home = env::var("HOME").ok();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("HOME", temp_dir.path());
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let paths = SettingsPaths::from_config_dir();

        unsafe {
            match original_home {
                Some(val) => env::set_var("HOME", val),
                None => env::remove_var("HOME"),
            }
            match original_xdg {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        if cfg!(target_os = "linux") {
            let paths = paths.unwrap();
            assert_eq!(
                paths.user,
                temp_dir.path().join("lantern").join("settings").join("user_settings.toml")
            );
            assert_eq!(
                paths.default,
                temp_dir.path().join("lantern").join("settings").join("default_settings.toml")
            );
        }
    }

    #[test]
    fn test_load_from_valid_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, CUSTOM_SETTINGS).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();

        assert_eq!(settings.window.title, "Viewports");
        assert_eq!((settings.window.width, settings.window.height), (800, 600));
        assert_eq!(settings.window.target_fps, 30);
        assert_eq!(settings.renderer.clear_color, [0, 0, 0, 255]);
        assert!(!settings.renderer.vsync);
        assert_eq!(settings.media.root, PathBuf::from("assets"));
        assert_eq!(settings.media.on_load_failure, LoadFailurePolicy::Continue);
        assert_eq!(settings.media.path("dots.png"), PathBuf::from("assets").join("dots.png"));
        assert_eq!(settings.demo.variant, "viewports");
    }

    #[test]
    fn test_missing_user_but_default_exists() {
        let temp_dir = tempdir().unwrap();
        let paths = SettingsPaths::under(temp_dir.path());
        fs::create_dir_all(paths.default.parent().unwrap()).unwrap();
        fs::write(&paths.default, CUSTOM_SETTINGS).unwrap();
        assert!(!paths.user.exists());

        let settings = Settings::initialize(&paths).unwrap();

        assert_eq!(settings.demo.variant, "viewports");
        assert!(paths.user.exists());
        assert_eq!(Settings::load_from_file(&paths.user).unwrap(), settings);
    }

    #[test]
    fn test_nothing_on_disk_writes_hardcoded_defaults() {
        let temp_dir = tempdir().unwrap();
        let paths = SettingsPaths::under(temp_dir.path());

        let settings = Settings::initialize(&paths).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load_from_file(&paths.default).unwrap(), Settings::default());
        assert_eq!(Settings::load_from_file(&paths.user).unwrap(), Settings::default());
    }

    #[test]
    fn test_corrupt_user_settings_fall_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let paths = SettingsPaths::under(temp_dir.path());
        fs::create_dir_all(paths.user.parent().unwrap()).unwrap();
        fs::write(&paths.user, "this is [not valid toml").unwrap();
        fs::write(&paths.default, CUSTOM_SETTINGS).unwrap();

        let settings = Settings::initialize(&paths).unwrap();

        assert_eq!(settings.window.title, "Viewports");
        assert_eq!(Settings::load_from_file(&paths.user).unwrap(), settings);
    }

    #[test]
    fn test_load_from_invalid_file_is_serde_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[window]\nwidth = \"wide\"").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Serde(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("settings.toml");
        let mut settings = Settings::default();
        settings.media.on_load_failure = LoadFailurePolicy::Continue;
        settings.window.title = String::from("Sprites");

        settings.save_to_file(&path).unwrap();

        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }
}
