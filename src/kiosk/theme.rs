use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Preferences io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences encoding error: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    pub fn load_from(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "preferences_read_failed");
                return Self::default();
            }
        };

        toml::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "preferences_parse_failed");
            Self::default()
        })
    }

    pub fn save_to(&self, data_dir: &Path) -> Result<(), PreferencesError> {
        fs::create_dir_all(data_dir)?;
        fs::write(Self::path(data_dir), toml::to_string(self)?)?;
        Ok(())
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
