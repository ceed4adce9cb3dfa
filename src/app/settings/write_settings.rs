use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SettingsError;
use crate::api::DEFAULT_BASE_URL;
use crate::ui::themes::{Palette, ThemeName};

/// User-tunable options, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend the demos are sent to.
    pub base_url: String,
    pub theme: ThemeName,
    /// Show the backend code snippet next to the result.
    pub show_code: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Optional colour overrides applied on top of `theme`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: ThemeName::Dark,
            show_code: true,
            log_level: "info".to_string(),
            palette: None,
        }
    }
}

/// Write settings to `path`, creating its directory.
pub fn save_settings_to(path: &Path, s: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(s)?;
    std::fs::write(path, text).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
