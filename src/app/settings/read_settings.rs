use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::{Settings, SettingsError};

/// Load settings from `path`. A missing file yields defaults; anything that
/// exists but does not parse is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
