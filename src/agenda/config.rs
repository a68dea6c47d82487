use crate::error::Result;
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "AGENDA_CONFIG_DIR";

/// Presentation settings, optionally read from `config.json`.
///
/// The file only tunes the terminal session. It never holds people or appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgendaConfig {
    /// Wait for a key press after each command
    #[serde(default = "default_true")]
    pub pause_between_commands: bool,

    /// Clear the screen after the pause
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Style messages with ANSI colors (still subject to terminal detection)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            pause_between_commands: true,
            clear_screen: true,
            color: true,
        }
    }
}

impl AgendaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AgendaConfig = serde_json::from_str(&content)?;
        debug!("loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Like [`AgendaConfig::load`], but an unreadable or malformed file only
    /// logs a warning and yields the defaults. The session always starts.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(&config_dir).unwrap_or_else(|e| {
            warn!(
                "ignoring config in {}: {}",
                config_dir.as_ref().display(),
                e
            );
            Self::default()
        })
    }
}

/// `$AGENDA_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "agenda", "agenda").map(|dirs| dirs.config_dir().to_path_buf())
}
