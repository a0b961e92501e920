//! Saved default configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::GenerationConfig;
use crate::Result;

/// Load the saved defaults, writing them out first if the file is missing.
pub fn load() -> Result<GenerationConfig> {
    load_from(&path())
}

pub fn load_from(path: &Path) -> Result<GenerationConfig> {
    if !path.exists() {
        let config = GenerationConfig::default();
        save_to(path, &config)?;
        return Ok(config);
    }

    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        let config = GenerationConfig::default();
        save_to(path, &config)?;
        return Ok(config);
    }

    debug!(path = %path.display(), "loaded configuration");
    Ok(toml::from_str(&text)?)
}

pub fn save(config: &GenerationConfig) -> Result<()> {
    save_to(&path(), config)
}

pub fn save_to(path: &Path, config: &GenerationConfig) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    debug!(path = %path.display(), "saved configuration");
    Ok(())
}

/// `$HOME/.config/passgen/config.toml`, or relative to `.` without `HOME`.
pub fn path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/config.toml")
}
