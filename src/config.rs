/// Runtime settings, read from an optional TOML file.
///
/// ```toml
/// fps = 60
/// player_image = "cheryl.png"
/// seed = 7
/// log_file = "cat_walk.log"
/// ```
///
/// Missing keys fall back to their defaults. Gameplay constants (spawn
/// odds, scoring, cooldowns) are fixed and not read from here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "cat_walk.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Target frame rate. Cooldowns and heart lifetimes count frames.
    pub fps: u32,
    /// Optional picture of the player; a placeholder is drawn without it.
    pub player_image: PathBuf,
    /// Seed for the street generator. Random when absent.
    pub seed: Option<u64>,
    /// Where log output goes while the terminal is in raw mode.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: 60,
            player_image: PathBuf::from("cheryl.png"),
            seed: None,
            log_file: PathBuf::from("cat_walk.log"),
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.fps = config.fps.clamp(1, 240);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// An explicit path must load; otherwise use `cat_walk.toml` if present,
    /// else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
