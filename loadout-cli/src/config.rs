use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use loadout_core::Result;

/// Paths remembered between runs so they can be left off the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub save_path: Option<PathBuf>,
    pub registry_path: Option<PathBuf>,
}

impl CliConfig {
    /// `<config dir>/LoadoutRandomiser/cli_config.json`, if the platform has
    /// a config or data directory at all.
    pub fn default_path() -> Option<PathBuf> {
        let base = dirs::config_dir().or_else(dirs::data_dir)?;
        Some(base.join("LoadoutRandomiser").join("cli_config.json"))
    }

    /// A missing file is an empty config. An unreadable one is logged and
    /// treated the same way.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring remembered paths");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Like `save_to`, but failing to remember paths never fails the run.
    pub fn store(&self, path: &Path) {
        if let Err(err) = self.save_to(path) {
            warn!(path = %path.display(), %err, "could not remember paths");
        }
    }
}
