pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

use std::path::PathBuf;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{ensure_dirs_exist, project_config_dir, settings_path, user_cache_dir};
pub use keybinds::*;
pub use read_settings::load_settings_from;
pub use write_settings::{save_settings_to, Settings};

/// Failures reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no user config directory available on this platform")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
