// src/config/config_load.rs
//
// Loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use super::config_types::{AnimationConfig, PatternConfig, StyleConfig, WindowConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub pattern: PatternConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, falling back to the
    /// working directory. No file at all means built-in defaults; a file that
    /// exists but fails to parse is an error.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match Self::find_config_file() {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    fn find_config_file() -> Option<PathBuf> {
        if let Some(path) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join("config.toml")))
        {
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("config.toml");
        local.exists().then_some(local)
    }
}
