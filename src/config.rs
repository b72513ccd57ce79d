use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

/// Centralized configuration for the application
pub struct Config {
    hg_path: String,
}

#[derive(Deserialize)]
struct FileConfig {
    #[serde(default)]
    hg_path: Option<String>,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Access the global configuration. Lazily initializes if not already initialized.
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(build_config)
    }

    /// Returns the command to invoke Mercurial.
    pub fn hg_cmd(&self) -> &str {
        &self.hg_path
    }
}

fn build_config() -> Config {
    let file_cfg = load_file_config();
    // Fall back to PATH lookup; a bad hg_path surfaces as a spawn error on
    // first use.
    let hg_path = file_cfg
        .as_ref()
        .and_then(|c| c.hg_path.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "hg".to_string());

    Config { hg_path }
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_file_path()?;
    let data = fs::read(&path).ok()?;
    serde_json::from_slice::<FileConfig>(&data).ok()
}

fn config_file_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        let home = env::var("USERPROFILE").ok()?;
        Some(Path::new(&home).join(".hg-szz").join("config.json"))
    }
    #[cfg(not(windows))]
    {
        let home = env::var("HOME").ok()?;
        Some(Path::new(&home).join(".hg-szz").join("config.json"))
    }
}
