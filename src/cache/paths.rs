// Filesystem path utilities.
// Constructs paths for the config directory (~/.config/gtasks-cli on Linux).

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base config directory for the application.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gtasks-cli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the persisted task list title/id cache.
pub fn cache_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("tasklists_cache.json"))
}

/// Path to the user configuration file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let dir = config_dir().unwrap();
        assert!(cache_file().unwrap().starts_with(&dir));
        assert!(config_file().unwrap().starts_with(&dir));
        assert!(cache_file().unwrap().ends_with("tasklists_cache.json"));
        assert!(config_file().unwrap().ends_with("config.toml"));
    }
}
