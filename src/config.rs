use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use barnameh_core::store::KeyValueStore;
use barnameh_core::PlannerResult;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory to keep planner data in (default: platform data dir)
    pub data_dir: Option<String>,
}

/// Get the config file path (~/.config/barnameh/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("barnameh");
    Ok(config_dir.join("config.toml"))
}

/// Load config from ~/.config/barnameh/config.toml. Everything has a
/// default, so a missing file is not an error.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Data directory holding the planner store (~/.local/share/barnameh
/// unless overridden by `data_dir` in the config file).
pub fn data_dir(config: &Config) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(expand_path(dir)),
        None => {
            let dir = dirs::data_dir().context("Could not determine data directory")?;
            Ok(dir.join("barnameh"))
        }
    }
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Open the file store at the configured data directory.
pub fn open_store() -> Result<FileStore> {
    let config = load_config()?;
    Ok(FileStore::new(data_dir(&config)?))
}

/// Key-value store keeping each key as a JSON file in one directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> PlannerResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> PlannerResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Replace via temp file + rename
        let path = self.key_path(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
