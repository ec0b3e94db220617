use crate::error::CliError;
use anyhow::Result;
use directories::ProjectDirs;
use roomcall_core::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Chat server WebSocket URL
    pub node_url: Option<String>,
    /// Answer used by `listen` when there is no terminal to prompt on
    pub auto_accept: bool,
    /// Ring the terminal bell when an invite arrives
    pub sound: bool,
    /// Overrides for the built-in English strings, keyed by translation key
    pub translations: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: None,
            auto_accept: false,
            sound: true,
            translations: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(config_dir: Option<&str>) -> Result<Self> {
        let Some(dir) = config_dir_path(config_dir) else {
            debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };
        Self::load_from(&dir.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::english().merge(self.translations.clone())
    }
}

fn config_dir_path(config_dir: Option<&str>) -> Option<PathBuf> {
    // Use provided config_dir, then check environment variable, then use default
    if let Some(dir) = config_dir {
        Some(PathBuf::from(dir))
    } else if let Ok(dir) = std::env::var("ROOMCALL_CONFIG_DIR") {
        Some(PathBuf::from(dir))
    } else {
        ProjectDirs::from("", "Roomcall", "roomcallctl")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
