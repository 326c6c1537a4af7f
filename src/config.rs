// User configuration persisted as a flat TOML file.
// Currently holds only the default task list title.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigData {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_tasklist_title: Option<String>,
}

/// User configuration bound to a file path.
pub struct Config {
    path: PathBuf,
    data: ConfigData,
}

impl Config {
    /// Load configuration from `path`; a missing file yields defaults.
    pub fn load(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            toml::from_str(&fs::read_to_string(&path)?)?
        } else {
            ConfigData::default()
        };
        Ok(Self { path, data })
    }

    /// Title of the task list to use when no selector flag is given.
    pub fn default_tasklist_title(&self) -> Option<&str> {
        self.data.default_tasklist_title.as_deref()
    }

    /// Set the default task list title and persist the config.
    pub fn set_default_tasklist_title(&mut self, title: &str) -> Result<()> {
        self.data.default_tasklist_title = Some(title.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(&self.data)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
